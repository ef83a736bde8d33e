pub mod classify_ws;

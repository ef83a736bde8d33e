use crate::domain::classification::entities::InputType;

#[derive(Debug, Clone)]
pub struct ClassifyIngredientsInput {
    pub input_type: InputType,
    pub text_input: Option<String>,
    pub image_data: Option<Vec<u8>>,
}

impl ClassifyIngredientsInput {
    pub fn text(ingredients: impl Into<String>) -> Self {
        Self {
            input_type: InputType::Text,
            text_input: Some(ingredients.into()),
            image_data: None,
        }
    }

    pub fn image(image_data: Vec<u8>) -> Self {
        Self {
            input_type: InputType::Image,
            text_input: None,
            image_data: Some(image_data),
        }
    }
}

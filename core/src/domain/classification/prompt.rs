//! Fixed instruction template sent to the classifier.
//!
//! The template text is part of the external behaviour of the relay: the
//! image path echoes it verbatim in its success reply, so it must not drift.

use crate::domain::classification::entities::InputType;

/// Substitution point inside [`PROMPT_TEMPLATE`].
const INSERTION_MARKER: &str = "{insertion}";

/// The instruction set given to the classifier, with one substitution point
/// for the per-request directive.
pub const PROMPT_TEMPLATE: &str = r#"
You are an expert in Islamic dietary law.
I will give you a string of ingredients.
Your task is to:

1. Extract the individual ingredients.

2. Categorize them into the following keys:

- "halal": List of ingredients that are clearly permissible.
- "musbooh": List of ingredients that scholars differ on (doubtful).
- "haram": List of ingredients that are clearly impermissible.
- "explanations": A dictionary where each musbooh and haram ingredient has an explanation for why it is classified that way.
- "result": A string. The possible values are:
    - "haram": If there is at least one haram ingredient.
    - "musbooh": If there is no haram but at least one musbooh ingredient.
    - "halal": If there are no haram or musbooh ingredients.

3. Output ONLY valid raw JSON (do not include backticks, markdown formatting, or code blocks).

{insertion}
"#;

/// Build the full prompt for one request.
///
/// The text directive embeds the ingredients string; the image directive is
/// fixed and the image itself travels as a separate content part.
pub fn build_prompt(input_type: InputType, ingredients: Option<&str>) -> String {
    let directive = match input_type {
        InputType::Image => "Extract and analyze the ingredients from the image".to_string(),
        InputType::Text => format!(
            "Here's the ingredients string to analyze: {}",
            ingredients.unwrap_or_default()
        ),
    };

    PROMPT_TEMPLATE.replace(INSERTION_MARKER, &directive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_carries_the_instruction_set() {
        assert!(PROMPT_TEMPLATE.contains("You are an expert in Islamic dietary law."));
        assert!(PROMPT_TEMPLATE.contains("\"musbooh\": List of ingredients"));
        assert!(PROMPT_TEMPLATE.contains("Output ONLY valid raw JSON"));
        assert!(PROMPT_TEMPLATE.contains(INSERTION_MARKER));
    }

    #[test]
    fn text_prompt_embeds_ingredients() {
        let prompt = build_prompt(InputType::Text, Some("gelatin, sugar, water"));
        assert!(prompt.contains("Here's the ingredients string to analyze: gelatin, sugar, water"));
        assert!(!prompt.contains(INSERTION_MARKER));
    }

    #[test]
    fn image_prompt_uses_fixed_directive() {
        let prompt = build_prompt(InputType::Image, None);
        assert!(prompt.contains("Extract and analyze the ingredients from the image"));
        assert!(!prompt.contains(INSERTION_MARKER));
    }
}

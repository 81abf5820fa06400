use crate::models::GeneratedStory;

/// Marker the model is told to print between the story and the image description.
pub const IMAGE_PROMPT_DELIMITER: &str = "---IMAGE_PROMPT---";

/// Instruction sent to the text model. `language` is the selector label as
/// shown to the user, flag included.
pub fn build_story_prompt(child_name: &str, topic: &str, language: &str) -> String {
    format!(
        "Role: Kind children's storyteller.\n\
        Task: Write a short, magical story.\n\
        \n\
        INPUTS:\n\
        Child's name: {child_name}\n\
        Topic: {topic}\n\
        LANGUAGE: Write the story strictly in {language}.\n\
        \n\
        INSTRUCTIONS:\n\
        1. Kind, safe, no scary moments.\n\
        2. Use the child's name.\n\
        3. Length: 4-5 paragraphs.\n\
        \n\
        IMPORTANT ENDING:\n\
        At the very end, strictly on a new line, write: '{IMAGE_PROMPT_DELIMITER}'\n\
        Then write a short visual description for the story in ENGLISH (for the image generator).\n\
        Example: \"Cute fluffy cat in space suit, cartoon style.\""
    )
}

/// Splits raw model output at the first delimiter. Anything after a second
/// delimiter is dropped.
pub fn split_story_response(raw: &str) -> GeneratedStory {
    let mut parts = raw.split(IMAGE_PROMPT_DELIMITER);
    let story_text = parts.next().unwrap_or_default().trim().to_string();
    let image_prompt = parts.next().unwrap_or_default().trim().to_string();
    GeneratedStory { story_text, image_prompt }
}

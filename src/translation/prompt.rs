pub const LINE_PROMPT_TEMPLATE: &str = "You are a translator. Translate the following {source_language} text to {target_language}. \
     Output only the translated text without any explanations, quotes, or transliteration.";

pub const BATCH_PROMPT_TEMPLATE: &str = "You are a translator. The user sends a JSON array of {source_language} words. \
     Translate each word to {target_language}. \
     Respond with only a JSON array of objects of the form {\"bengali\": \"<word>\", \"hindi\": \"<translation>\"}, \
     one object per input word, copying each input word verbatim into \"bengali\".";

#[allow(clippy::literal_string_with_formatting_args)]
fn render(template: &str, source_language: &str, target_language: &str) -> String {
    // {source_language}/{target_language} are placeholders for string replacement, not format arguments
    template
        .replace("{source_language}", source_language)
        .replace("{target_language}", target_language)
}

pub fn build_line_prompt(source_language: &str, target_language: &str) -> String {
    render(LINE_PROMPT_TEMPLATE, source_language, target_language)
}

pub fn build_batch_prompt(source_language: &str, target_language: &str) -> String {
    render(BATCH_PROMPT_TEMPLATE, source_language, target_language)
}

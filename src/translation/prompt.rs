// Translation prompt template
// Author: kelexine (https://github.com/kelexine)

/// Render the translation instruction for the model.
///
/// The source text is interpolated verbatim. Nothing in it is escaped, so
/// instructions embedded in the text reach the model unchanged.
pub fn build_prompt(text: &str, source_language: &str, target_language: &str) -> String {
    format!(
        "You are a professional translator with expertise in {source} and {target}.

Your task is to translate the following text from {source} to {target}.

TRANSLATION GUIDELINES:
1. Maintain the original meaning and context
2. Use natural, fluent language in the target language
3. Preserve the tone and style of the original text
4. Handle idioms and cultural expressions appropriately
5. Ensure grammatical correctness
6. Maintain any formatting (line breaks, spacing)
7. Do NOT add explanations or notes, provide ONLY the translation

SOURCE TEXT ({source}):
{text}

TRANSLATION ({target}):",
        source = source_language,
        target = target_language,
        text = text,
    )
}

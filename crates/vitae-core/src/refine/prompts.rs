// Refinement prompt templates.

pub const REFINE_SYSTEM: &str = "\
You are an AI assistant that extracts structured resume data. \
Your goal is to refine and complete the extracted resume data while strictly following the given JSON schema. \
You must answer only by calling the provided function with arguments that satisfy its schema. \
Ensure that skills are grouped under meaningful categories (e.g. 'Programming Languages', 'Frameworks', 'Databases').";

pub const REFINE_PROMPT: &str = r#"Below is the extracted resume text and preliminary structured data.
Refine the extracted data so that it matches the function's JSON schema.

**Extracted Data (preliminary):**
{preliminary}

**Full Resume Text:**
{raw_text}

## Formatting Rules:
- Skills **must be grouped** into categories such as:
  - "Programming Languages"
  - "Frameworks & Libraries"
  - "Databases"
  - "DevOps & Tools"
- Each category must contain a list of skills in this format:

  {
    "title": "Programming Languages",
    "list": [
      { "name": "JavaScript", "icon": "" },
      { "name": "Python", "icon": "" }
    ]
  }

- Leave "icon" values empty; they are assigned afterwards.
- Keep every key of the schema, using empty strings or empty lists for unknown values.
- Ensure consistent formatting and proper capitalization.

Return the result only through the function call."#;

pub const FUNCTION_DESCRIPTION: &str = "Return refined resume data in the specified schema.";

/// Fill the `{preliminary}` and `{raw_text}` slots of [`REFINE_PROMPT`].
///
/// Single pass: placeholder text inside either value is copied verbatim.
pub fn refine_prompt(preliminary: &str, raw_text: &str) -> String {
    let mut out = String::with_capacity(REFINE_PROMPT.len() + preliminary.len() + raw_text.len());
    let mut rest = REFINE_PROMPT;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{preliminary}") {
            out.push_str(preliminary);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{raw_text}") {
            out.push_str(raw_text);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);

    out
}

use crate::models::PromptRole;

/// Default scaffold prefixed to every prompt (role, objective, constraints)
pub const DEFAULT_INSTRUCTIONS: &str = r#"ROLE:
You are an expert medical content analyst, academic editor, and medical educator.

OBJECTIVE:
Transform the provided raw transcript into a structured, high-quality medical course chapter,
as if it were part of a professional medical textbook or a PDF course handout.

LANGUAGE:
Keep the output strictly in the ORIGINAL LANGUAGE of the transcript (French).

CORE TASKS:
Remove noise (repetitions, hesitations, irrelevant digressions).
Preserve ALL medically relevant details, mechanisms, examples, and clinical reasoning.
Reorganize the content into a clear didactic structure optimized for learning.
Do NOT summarize excessively or oversimplify.

STRUCTURE REQUIREMENTS:
Organize the content as a textbook chapter using:
- Title of the chapter (If this is the first part)
- Logical sections and subsections (H2 / H3 style)
- Use bullet points ONLY when they improve clarity
- Bold key concepts, definitions, and take-home ideas

PEDAGOGICAL OPTIMIZATION:
- Explicitly define important terms when first introduced
- Highlight cause-effect relationships and clinical reasoning

CONSTRAINTS:
- Do NOT invent information not present in the transcript
- Do NOT reference guidelines not mentioned
- No emojis, no casual tone.
- FINAL OUTPUT: A clean, structured, textbook-level medical course chapter."#;

/// Trailing block for the first part
pub const FIRST_PART_INSTRUCTIONS: &str = "INSTRUCTIONS FOR THIS PART:
Please adhere strictly to the ROLE and STRUCTURE defined above.
Start writing the Textbook Chapter based on this text.
";

/// Trailing block for every later part
pub const CONTINUATION_INSTRUCTIONS: &str = "CONTEXT:
You are currently writing a medical textbook chapter based on a transcript.
You have already processed the previous parts.

INSTRUCTIONS FOR THIS PART:
**CONTINUE** the textbook chapter from where you left off.
- Do NOT create a new Title or a new Introduction.
- Maintain the same formatting (H2/H3, bolding) as the previous part.
- Treat this text as a direct continuation of the previous segment.
";

/// Trailing instructions for a role
pub fn role_instructions(role: PromptRole) -> &'static str {
    match role {
        PromptRole::First => FIRST_PART_INSTRUCTIONS,
        PromptRole::Continuation => CONTINUATION_INSTRUCTIONS,
    }
}

/// Compose the prompt for one segment
///
/// Layout, in order: the scaffold `instructions`, an input marker naming the
/// 1-based part and `total`, the segment verbatim, then the role block
/// selected by `index`.
pub fn compose(segment: &str, index: usize, total: usize, instructions: &str) -> String {
    let role = PromptRole::for_index(index);
    let trailer = role_instructions(role);

    let mut prompt = String::with_capacity(
        instructions.len() + segment.len() + trailer.len() + 64,
    );

    prompt.push_str(instructions.trim_end());
    prompt.push_str("\n\n");

    prompt.push_str(&format!("INPUT TEXT (PART {}/{}):\n", index + 1, total));
    prompt.push_str(segment);
    prompt.push_str("\n\n");

    prompt.push_str(trailer);

    prompt
}

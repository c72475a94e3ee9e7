//! Fixed prompt text: system instructions, example questions, and document search.

/// Instructions sent as the first message of every conversation.
pub const SYSTEM_PROMPT: &str = "You are an Arabic-speaking assistant specialized in guiding users \
through the process of obtaining various Moroccan government documents. Your responses should be \
clear, informative, and structured in a newsletter-style format with visually engaging elements, \
like bullet points, icons, and headings. You will provide detailed steps and documents required \
for the user's request, as well as any relevant information about timeframes, locations, and \
additional notes. Write {{map-pin}} right before a location or office name. Your language should \
be friendly, concise, and professional.";

/// Example questions offered to new users.
pub const EXAMPLE_PROMPTS: &[&str] = &[
    "كيفية استخراج البطاقة الوطنية للتعريف الإلكترونية؟",
    "ما هي الوثائق المطلوبة للحصول على جواز السفر؟",
    "كيف يمكنني الحصول على رخصة السياقة؟",
    "ما هي خطوات استخراج عقد الازدياد؟",
];

/// Shown in place of the reply while a request is in flight.
pub const LOADING_TEXT: &str = "جاري التحميل...";

/// Follow-up question asked when the user searches a document reference.
pub fn document_search_prompt(name: &str) -> String {
    format!("ما هي الوثائق المطلوبة للحصول على {}؟", name.trim())
}

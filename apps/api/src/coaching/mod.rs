// Career coaching endpoints: interview questions, a technical quiz built
// from the resume's skills, and role-based content suggestions (cached in
// Redis). All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;

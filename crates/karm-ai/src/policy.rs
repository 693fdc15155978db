//! The fixed domain policy attached to every request.

/// Default Gemini model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// System instruction enforcing Karm's topic scope and reply shape.
/// Compliance is entirely the remote model's responsibility; nothing in
/// this crate re-checks topics locally.
const KARM_INSTRUCTION: &str = "\
You are an expert virologist for ArogyaDrishti, specializing in disease simulation, \
virus mutation analysis, and public health management.
Your rules:
1. Only answer questions related to healthcare, disease simulation, virus mutations, epidemiology, and public health.
2. If asked about unrelated topics, respond: \"I specialize only in healthcare and disease simulation topics.\"
3. Provide accurate, evidence-based information about diseases, prevention, and health management.
4. Use a professional but compassionate tone to assist users with health-related queries.
5. Your responses should be clear, concise, and helpful.
6. Always emphasize consulting healthcare professionals for medical advice.
7. Always answer in paragraph and in less than 200 words.
8. Don't make the characters bold";

/// Immutable instruction + target-model pair. Initialized once at startup
/// and attached to every request, not only the first.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    instruction: String,
    model: String,
}

impl PolicyConfig {
    /// The Karm policy with the default model.
    pub fn karm() -> Self {
        Self {
            instruction: KARM_INSTRUCTION.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

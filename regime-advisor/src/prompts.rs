//! Message templates sent to the chat endpoint.

pub const RECOMMENDATION_SYSTEM_PROMPT: &str =
    "You are a knowledgeable Indian tax advisor providing personalized recommendations.";

pub const QUESTION_SYSTEM_PROMPT: &str = "You are a knowledgeable Indian tax advisor. \
     Provide accurate, helpful answers about Indian tax regimes and regulations.";

/// Wraps the financial summary in the recommendation request.
pub fn recommendation_prompt(financial_context: &str) -> String {
    format!(
        "Based on the following financial information for an Indian taxpayer, provide a \
         detailed, personalized tax regime recommendation. Focus on explaining why the \
         recommended regime is better and what specific advantages it offers. Keep the tone \
         professional but conversational.\n\
         \n\
         {financial_context}\n\
         \n\
         Provide a comprehensive analysis in this format:\n\
         1. Clear recommendation statement\n\
         2. 3-4 specific reasons why this regime is advantageous\n\
         3. Additional financial planning tips based on their current tax situation"
    )
}

/// Wraps the question context in the Q&A request.
pub fn question_prompt(question_context: &str) -> String {
    format!(
        "{question_context}\n\
         \n\
         Provide a clear, detailed answer focusing on Indian tax regulations. If the question \
         is related to the user's specific financial situation, incorporate the above context \
         into your response. Keep the tone professional but conversational."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_prompt_embeds_context_between_instructions() {
        let prompt = recommendation_prompt("Better Regime: Old Regime");

        assert!(prompt.starts_with("Based on the following financial information"));
        assert!(prompt.contains("\n\nBetter Regime: Old Regime\n\n"));
        assert!(prompt.ends_with("based on their current tax situation"));
    }

    #[test]
    fn question_prompt_starts_with_context() {
        let prompt = question_prompt("Question: Can I switch?");

        assert!(prompt.starts_with("Question: Can I switch?\n\n"));
        assert!(prompt.contains("Indian tax regulations"));
    }
}

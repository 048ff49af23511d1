//! Every sentence the skill can speak.

pub const WELCOME_SPEECH: &str = "Welcome to Smart Buddy! You can ask me anything.";
pub const WELCOME_REPROMPT: &str = "Please ask your question.";

pub const EMPTY_QUERY_SPEECH: &str = "I didn't hear your question. Can you ask again?";
pub const EMPTY_QUERY_REPROMPT: &str = "Please ask a question.";

pub const ANSWER_REPROMPT: &str = "You can ask me something else.";

pub const HELP_SPEECH: &str =
    "You can ask me any question, and I will try to answer using Smart Buddy.";
pub const HELP_REPROMPT: &str = "What would you like to ask?";

pub const GOODBYE_SPEECH: &str = "Goodbye!";

pub const FALLBACK_SPEECH: &str = "Sorry, I did not understand that. Please ask again.";
pub const FALLBACK_REPROMPT: &str = "Please try again.";

pub const TRANSPORT_FAILURE_SPEECH: &str =
    "Sorry, I had trouble connecting to the answer service. Please try again later.";
pub const AUTH_DENIED_SPEECH: &str =
    "Sorry, the answer service rejected this skill's credentials. Please check the configured API key.";
pub const MALFORMED_RESPONSE_SPEECH: &str =
    "Sorry, I received an answer I couldn't read. Please try asking again.";

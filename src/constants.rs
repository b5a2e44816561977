// UI Constants
pub const TITLE_MAX_CHARS: usize = 30;
pub const REPLY_DELAY_MS: u64 = 800;

pub const GREETING: &str = "Hello! I'm DecorAI, your party design assistant. How can I help you transform your space today?";
pub const CANNED_REPLY: &str = "That's a great idea! I'd be happy to help you with designing your space. Let me provide some suggestions based on your space.";

// Export Constants
pub const EXPORT_TITLE: &str = "DecorAI Chat History";
pub const EXPORT_TXT_FILENAME: &str = "decorai_chat_history.txt";
pub const EXPORT_HTML_FILENAME: &str = "decorai_chat_history.html";

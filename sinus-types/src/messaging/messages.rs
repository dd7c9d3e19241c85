pub const ERROR_PREFIX: &str = "❌ ";
pub const WARNING_PREFIX: &str = "⚠ ";
pub const SUCCESS_PREFIX: &str = "✔ ";
pub const USAGE_PREFIX: &str = "❌ Usage: ";

// Reaction controls on the now playing message.
pub const REACTION_PREV: &str = "⏮";
pub const REACTION_PLAYPAUSE: &str = "⏯";
pub const REACTION_NEXT: &str = "⏭";
pub const REACTION_SUCCESS: &str = "✅";

pub const STATUS_PREFIX: &str = "🎵 ";
pub const STATUS_SUFFIX: &str = " 🎵";

pub const EMBED_COLOR: u32 = 0x00e1_3438;
pub const EMBED_FOOTER_ICON: &str = "https://sinusbot.github.io/logo.png";
pub const EMBED_FOOTER_TEXT: &str = "SinusBot";
pub const EMBED_FIELD_DURATION: &str = "Duration";
pub const EMBED_FIELD_ALBUM: &str = "Album";
pub const EMBED_STREAM: &str = "stream";

pub const NOTHING_PLAYING: &str = "There is nothing playing at the moment.";
pub const NOTHING_FOUND: &str = "Sorry, nothing found.";
pub const PONG: &str = "PONG";
pub const INVALID_URL: &str = "Invalid URL.";
pub const INVALID_RESPONSE: &str = "Invalid Response";

pub const NO_PLAYBACK_PERMISSION: &str =
    "You need the playback permission to use reaction controls";
pub const UNAUTHORIZED_USER: &str = "You don't have the permission to use this command.";

pub const REGISTRATION_DISABLED: &str = "Registration is disabled.";
pub const USERNAME_EXISTS: &str = "This username already exists.";
pub const USER_CREATE_FAILED: &str = "Unable to create user, try another username.";
pub const PASSWORD_PUBLIC_CHANNEL: &str = "Don't use this command in a public channel.";
pub const PASSWORD_CHANGED: &str = "Changed your password.";
pub const SCRIPTS_RELOADED: &str =
    "Scripts reloaded.\nNew scripts require a complete sinusbot restart.";
pub const SCRIPTS_RELOAD_FAILED: &str =
    "Unable to reload scripts. Did you allow it in your `config.ini`?";
pub const JOIN_FAILED: &str = "I'm unable to join your channel :frowning:";
pub const BOT_NULL: &str = "Unable to change channel :frowning:\nTry to set a *Default Channel* in the webinterface and click save.";

pub const USAGE_REGISTER: &str = "register <username>";
pub const USAGE_PASSWORD: &str = "password <value>";
pub const USAGE_SEARCH: &str = "search <searchstring>";
pub const USAGE_PLAY: &str = "play <searchstring / uuid>";
pub const USAGE_QUEUENEXT: &str = "queuenext <searchstring / uuid>";
pub const USAGE_VOLUME: &str = "volume <up|down|dn|0-100>";
pub const USAGE_STREAM: &str = "stream <url>";
pub const USAGE_SAY: &str = "say <text>";
pub const USAGE_SAYEX: &str = "sayex <locale> <text>";
pub const USAGE_TTSURL: &str = "ttsurl <url>";
pub const USAGE_TTSLOCALE: &str = "ttslocale <locale>";
pub const USAGE_YT: &str = "yt <url>";
pub const USAGE_YTDL: &str = "ytdl <url>";
pub const USAGE_QYT: &str = "qyt <url>";
pub const USAGE_QYTDL: &str = "qytdl <url>";
pub const USAGE_REGISTRATION: &str = "registration <enable|disable>";
pub const USAGE_PREFIX_CMD: &str = "prefix <new prefix>";

pub const DEFAULT_PREFIX: &str = "!";
pub const PLUGIN_NAME: &str = "SinusBot Commands";
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const STORE_KEY_LAST_EMBEDS: &str = "lastEmbeds";

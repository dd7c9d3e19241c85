pub mod library;
pub mod playback;
pub mod playing;
pub mod remote;
pub mod tts;
pub mod voice;

pub use library::*;
pub use playback::*;
pub use playing::*;
pub use remote::*;
pub use tts::*;
pub use voice::*;

pub fn music_commands() -> [crate::Command; 23] {
    [
        playing(),
        next(),
        prev(),
        search(),
        play(),
        queue(),
        queuenext(),
        stop(),
        stop_idle(),
        volume(),
        stream(),
        say(),
        sayex(),
        ttsurl(),
        ttslocale(),
        yt(),
        ytdl(),
        qyt(),
        qytdl(),
        shuffle(),
        repeat(),
        join(),
        leave(),
    ]
}

use crate::utils::{duration_to_string, format_track};
use serde::{Deserialize, Serialize};
use sinus_types::messaging::messages::{
    EMBED_COLOR, EMBED_FIELD_ALBUM, EMBED_FIELD_DURATION, EMBED_FOOTER_ICON, EMBED_FOOTER_TEXT,
    EMBED_STREAM,
};
use sinus_types::Track;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedThumbnail {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub icon_url: String,
    pub text: String,
}

/// Wire shape of a Discord rich embed, only the parts we fill in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedThumbnail>,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
}

/// Body of a create or edit message call carrying one embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedMessage {
    pub embeds: Vec<Embed>,
}

impl From<Embed> for EmbedMessage {
    fn from(embed: Embed) -> Self {
        Self {
            embeds: vec![embed],
        }
    }
}

/// Builds the now playing embed for a track. `web_url` is the host's web
/// interface, it links the title and serves the album cover.
pub fn create_now_playing_embed(track: &Track, web_url: Option<&str>) -> Embed {
    let mut fields = vec![EmbedField {
        name: EMBED_FIELD_DURATION.to_string(),
        value: match track.duration {
            Some(duration) if !duration.is_zero() => duration_to_string(duration),
            _ => EMBED_STREAM.to_string(),
        },
        inline: true,
    }];
    if let Some(album) = track.album.as_ref().filter(|a| !a.is_empty()) {
        fields.push(EmbedField {
            name: EMBED_FIELD_ALBUM.to_string(),
            value: album.clone(),
            inline: true,
        });
    }

    let thumbnail = match (web_url, track.thumbnail.as_deref()) {
        (Some(base), Some(thumb)) if !thumb.is_empty() => Some(EmbedThumbnail {
            url: format!("{base}/cache/{thumb}"),
        }),
        _ => None,
    };

    Embed {
        title: format_track(track),
        url: web_url.map(str::to_string),
        color: EMBED_COLOR,
        thumbnail,
        fields,
        footer: EmbedFooter {
            icon_url: EMBED_FOOTER_ICON.to_string(),
            text: EMBED_FOOTER_TEXT.to_string(),
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_now_playing_embed_full() {
        let track = Track::new("1", "Song")
            .with_artist("Band")
            .with_album("Record")
            .with_duration(Duration::from_millis(65_000))
            .with_thumbnail("abc.jpg");
        let embed = create_now_playing_embed(&track, Some("https://bot.example.com"));

        assert_eq!(embed.title, "Band - Song");
        assert_eq!(embed.url.as_deref(), Some("https://bot.example.com"));
        assert_eq!(embed.color, 0xe13438);
        assert_eq!(
            embed.thumbnail.map(|t| t.url),
            Some("https://bot.example.com/cache/abc.jpg".to_string())
        );
        assert_eq!(embed.fields.len(), 2);
        assert_eq!(embed.fields[0].value, "1:05");
        assert_eq!(embed.fields[1].name, "Album");
        assert_eq!(embed.fields[1].value, "Record");
    }

    #[test]
    fn test_now_playing_embed_stream() {
        let track = Track::new("2", "Radio").with_thumbnail("abc.jpg");
        let embed = create_now_playing_embed(&track, None);

        assert_eq!(embed.fields.len(), 1);
        assert_eq!(embed.fields[0].value, "stream");
        assert!(embed.thumbnail.is_none());

        let body = serde_json::to_value(EmbedMessage::from(embed)).unwrap();
        assert!(body["embeds"][0].get("url").is_none());
        assert_eq!(body["embeds"][0]["footer"]["text"], "SinusBot");
    }
}

use strum::{Display, EnumString};

/// Audio container/codec requested via the `output_format` query parameter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString)]
pub enum OutputFormat {
    #[strum(serialize = "mp3_22050_32")]
    Mp3_22050Hz32kbps,
    #[strum(serialize = "mp3_44100_64")]
    Mp3_44100Hz64kbps,
    #[strum(serialize = "mp3_44100_128")]
    #[default]
    Mp3_44100Hz128kbps,
    #[strum(serialize = "mp3_44100_192")]
    Mp3_44100Hz192kbps,
    #[strum(serialize = "pcm_16000")]
    Pcm16000Hz,
    #[strum(serialize = "pcm_22050")]
    Pcm22050Hz,
    #[strum(serialize = "pcm_44100")]
    Pcm44100Hz,
    #[strum(serialize = "ulaw_8000")]
    MuLaw8000Hz,
    #[strum(serialize = "opus_48000_64")]
    Opus48000Hz64kbps,
}

impl OutputFormat {
    /// File extension matching the container
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Mp3_22050Hz32kbps
            | OutputFormat::Mp3_44100Hz64kbps
            | OutputFormat::Mp3_44100Hz128kbps
            | OutputFormat::Mp3_44100Hz192kbps => "mp3",
            OutputFormat::Pcm16000Hz | OutputFormat::Pcm22050Hz | OutputFormat::Pcm44100Hz => {
                "pcm"
            }
            OutputFormat::MuLaw8000Hz => "ulaw",
            OutputFormat::Opus48000Hz64kbps => "opus",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn output_format_wire_names() {
        assert_eq!(OutputFormat::default().to_string(), "mp3_44100_128");
        assert_eq!(
            OutputFormat::from_str("pcm_22050").unwrap(),
            OutputFormat::Pcm22050Hz
        );
        assert_eq!(OutputFormat::Opus48000Hz64kbps.extension(), "opus");
    }
}

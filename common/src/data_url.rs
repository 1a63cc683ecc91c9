//! data URL の解析と生成
//!
//! `data:<mime>[;param]*;base64,<payload>` 形式のみ扱う。
//! 解析はヘッダのみで、ペイロードはデコードしない。

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// 解析済みdata URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl<'a> {
    mime: String,
    payload: &'a str,
}

impl<'a> DataUrl<'a> {
    pub fn parse(url: &'a str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidDataUrl(reason.to_string());

        let rest = url.strip_prefix("data:").ok_or_else(|| invalid("data: で始まっていません"))?;
        let (header, payload) = rest.split_once(',').ok_or_else(|| invalid("',' がありません"))?;
        let media = header
            .strip_suffix(";base64")
            .ok_or_else(|| invalid("base64 エンコードではありません"))?;

        let mime = media.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        if mime.is_empty() {
            return Err(invalid("MIMEタイプがありません"));
        }

        Ok(Self { mime, payload })
    }

    pub fn encode(mime: &str, bytes: &[u8]) -> String {
        format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn payload(&self) -> &'a str {
        self.payload
    }

    /// デコード後のバイト数（ペイロード長とパディングから算出）
    pub fn decoded_len(&self) -> usize {
        let trimmed = self.payload.trim_end_matches('=');
        trimmed.len() * 3 / 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn test_parse_encoded_png() {
        let url = DataUrl::encode("image/png", PNG_HEADER);
        assert!(url.starts_with("data:image/png;base64,"));

        let parsed = DataUrl::parse(&url).unwrap();
        assert_eq!(parsed.mime(), "image/png");
        assert_eq!(parsed.decoded_len(), PNG_HEADER.len());
    }

    #[test]
    fn test_parse_with_parameters() {
        let parsed = DataUrl::parse("data:Image/JPEG;name=a.jpg;base64,AAEC").unwrap();
        assert_eq!(parsed.mime(), "image/jpeg");
        assert_eq!(parsed.payload(), "AAEC");
        assert_eq!(parsed.decoded_len(), 3);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for url in [
            "image/png;base64,AAAA",
            "data:image/png;base64",
            "data:image/png,AAAA",
            "data:;base64,AAAA",
        ] {
            let result = DataUrl::parse(url);
            assert!(matches!(result, Err(Error::InvalidDataUrl(_))), "受理されてしまった: {}", url);
        }
    }

    #[test]
    fn test_decoded_len_with_padding() {
        for len in 0..8 {
            let bytes = vec![0xffu8; len];
            let url = DataUrl::encode("application/octet-stream", &bytes);
            assert_eq!(DataUrl::parse(&url).unwrap().decoded_len(), len);
        }
    }
}

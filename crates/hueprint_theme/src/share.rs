//! Share tokens for palette pairs.
//!
//! A pair is serialized to JSON and then to URL-safe base64 without padding,
//! so the token drops straight into a query string. The dark-mode flag is not
//! part of the token; it travels as its own `dark` parameter.
//!
//! Tokens written with the standard alphabet (`+`, `/`, `=` padding) also
//! decode.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use url::{form_urlencoded, Url};

use crate::error::{DecodeError, EncodeError};
use crate::palette::{ColorScheme, PalettePair};

/// Query parameter holding the share token.
pub const PALETTE_PARAM: &str = "palette";

/// Query parameter holding `"true"` or `"false"`.
pub const DARK_PARAM: &str = "dark";

const MAX_TOKEN_BYTES: usize = 16 * 1024;

/// The `palette` and `dark` query parameters of a shared palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareParams {
    pub token: String,
    pub dark: bool,
}

impl ShareParams {
    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::from_dark_flag(self.dark)
    }

    /// `palette=<token>&dark=<true|false>`
    pub fn to_query(&self) -> String {
        format!(
            "{PALETTE_PARAM}={}&{DARK_PARAM}={}",
            self.token,
            self.scheme().as_flag()
        )
    }

    /// Read the share parameters from a query string or full URL.
    ///
    /// Values are percent-decoded; a literal `+` is kept, not read as a
    /// space. Returns `None` when there is no non-empty `palette` parameter.
    /// Only the literal `dark=true` selects the dark scheme.
    pub fn from_query(query: &str) -> Option<Self> {
        let input = query.trim();
        let raw = match Url::parse(input) {
            Ok(url) => url.query().unwrap_or_default().to_string(),
            Err(_) => {
                let input = input.split_once('#').map_or(input, |(before, _)| before);
                let query = input.split_once('?').map_or(input, |(_, after)| after);
                query.to_string()
            }
        };
        let raw = raw.replace('+', "%2B");

        let mut token = None;
        let mut dark = false;
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                PALETTE_PARAM if !value.is_empty() => token = Some(value.into_owned()),
                DARK_PARAM => dark = value == "true",
                _ => {}
            }
        }

        token.map(|token| Self { token, dark })
    }

    pub fn decode(&self) -> Result<(PalettePair, ColorScheme), DecodeError> {
        decode(self)
    }
}

/// Encode a palette pair into a URL-safe token.
pub fn encode_token(pair: &PalettePair) -> Result<String, EncodeError> {
    let json = serde_json::to_string(pair)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Encode a palette pair and the scheme it is shown in.
pub fn encode(pair: &PalettePair, scheme: ColorScheme) -> Result<ShareParams, EncodeError> {
    Ok(ShareParams {
        token: encode_token(pair)?,
        dark: scheme.is_dark(),
    })
}

/// Decode a token back into a palette pair.
///
/// Partial palettes are accepted; unknown roles and unparsable colors are
/// not.
pub fn decode_token(token: &str) -> Result<PalettePair, DecodeError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }
    if token.len() > MAX_TOKEN_BYTES {
        return Err(DecodeError::TooLarge {
            len: token.len(),
            max: MAX_TOKEN_BYTES,
        });
    }

    let normalized: String = token
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD.decode(normalized)?;
    let json = String::from_utf8(bytes)?;
    let pair = serde_json::from_str(&json)?;
    Ok(pair)
}

/// Decode share parameters into a pair and its scheme.
pub fn decode(params: &ShareParams) -> Result<(PalettePair, ColorScheme), DecodeError> {
    Ok((decode_token(&params.token)?, params.scheme()))
}

/// Like [`decode`], but both palettes must carry every role.
pub fn decode_complete(params: &ShareParams) -> Result<(PalettePair, ColorScheme), DecodeError> {
    let (pair, scheme) = decode(params)?;
    for (side, palette) in [("light", &pair.light), ("dark", &pair.dark)] {
        let missing = palette.missing_roles();
        if !missing.is_empty() {
            return Err(DecodeError::MissingRoles { side, missing });
        }
    }
    Ok((pair, scheme))
}

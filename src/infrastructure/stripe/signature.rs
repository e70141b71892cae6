//! Verification of the `stripe-signature` header.
//!
//! The header carries `t=<unix timestamp>,v1=<hex hmac>[,...]`; the
//! signature is HMAC-SHA256 over `"{t}.{raw body}"` keyed with the webhook
//! signing secret. Comparison is constant-time and the timestamp must fall
//! inside a replay window.

use chrono::Utc;
use derive_more::derive::{Display, Error};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Maximum accepted event age, matching Stripe's default tolerance.
const MAX_TIMESTAMP_AGE_SECS: i64 = 300;
/// Clock-skew allowance for timestamps slightly in the future.
const MAX_FUTURE_TOLERANCE_SECS: i64 = 60;

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum SignatureError {
	#[display("no webhook secret is configured")]
	SecretNotConfigured,
	#[display("missing stripe-signature header")]
	MissingHeader,
	#[display("malformed stripe-signature header")]
	MalformedHeader,
	#[display("event timestamp outside the accepted window")]
	TimestampOutOfRange,
	#[display("signature mismatch")]
	Mismatch,
}

/// Parsed `t=...,v1=...` header components.
#[derive(Debug, Clone)]
pub struct SignatureHeader {
	pub timestamp:    i64,
	pub v1_signature: Vec<u8>,
}

impl SignatureHeader {
	pub fn parse(header: &str) -> Result<Self, SignatureError> {
		let mut timestamp: Option<i64> = None;
		let mut v1_signature: Option<Vec<u8>> = None;

		for part in header.split(',') {
			let Some((key, value)) = part.split_once('=') else {
				return Err(SignatureError::MalformedHeader);
			};

			match key.trim() {
				"t" => {
					timestamp = Some(
						value
							.trim()
							.parse()
							.map_err(|_| SignatureError::MalformedHeader)?,
					);
				}
				"v1" => {
					v1_signature = Some(
						hex_decode(value.trim())
							.ok_or(SignatureError::MalformedHeader)?,
					);
				}
				// Unknown schemes (v0, ...) are ignored for forward
				// compatibility.
				_ => {}
			}
		}

		Ok(Self {
			timestamp:    timestamp.ok_or(SignatureError::MalformedHeader)?,
			v1_signature: v1_signature.ok_or(SignatureError::MalformedHeader)?,
		})
	}
}

/// Gate in front of the webhook route. Fails closed: without a configured
/// secret every delivery is rejected.
#[derive(Clone)]
pub struct WebhookVerifier {
	secret: Option<SecretString>,
}

impl WebhookVerifier {
	pub fn new(secret: Option<SecretString>) -> Self {
		Self { secret }
	}

	pub fn verify(
		&self,
		payload: &[u8],
		header: Option<&str>,
	) -> Result<(), SignatureError> {
		self.verify_at(payload, header, Utc::now().timestamp())
	}

	fn verify_at(
		&self,
		payload: &[u8],
		header: Option<&str>,
		now: i64,
	) -> Result<(), SignatureError> {
		let secret = self
			.secret
			.as_ref()
			.ok_or(SignatureError::SecretNotConfigured)?;
		let header =
			SignatureHeader::parse(header.ok_or(SignatureError::MissingHeader)?)?;

		let age = now - header.timestamp;
		if age > MAX_TIMESTAMP_AGE_SECS || age < -MAX_FUTURE_TOLERANCE_SECS {
			return Err(SignatureError::TimestampOutOfRange);
		}

		let mut mac =
			HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
				.map_err(|_| SignatureError::Mismatch)?;
		mac.update(header.timestamp.to_string().as_bytes());
		mac.update(b".");
		mac.update(payload);
		let expected = mac.finalize().into_bytes();

		let expected_bytes: &[u8] = expected.as_slice();
		if expected_bytes.ct_eq(&header.v1_signature).unwrap_u8() != 1 {
			return Err(SignatureError::Mismatch);
		}

		Ok(())
	}
}

fn hex_decode(s: &str) -> Option<Vec<u8>> {
	if s.is_empty() || s.len() % 2 != 0 {
		return None;
	}

	(0..s.len())
		.step_by(2)
		.map(|i| u8::from_str_radix(s.get(i..i + 2)?, 16).ok())
		.collect()
}

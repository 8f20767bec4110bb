use rand::Rng;

/// Upper bound (exclusive) for one-time codes: codes are 6 decimal digits,
/// zero-padded on display.
const OTP_RANGE: u32 = 1_000_000;

/// Generate a one-time code uniformly in [0, 999999].
pub fn generate_otp() -> u32 {
    rand::thread_rng().gen_range(0..OTP_RANGE)
}

/// Zero-padded display form used in OTP emails.
pub fn format_otp(otp: u32) -> String {
    format!("{:06}", otp)
}

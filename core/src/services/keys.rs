//! Cache key layout shared by the OTP and session services.

/// `otp_<phone>`: JSON OTP entry
pub fn otp_key(phone: &str) -> String {
    format!("otp_{}", phone)
}

/// `limit_<phone>`: presence-only issuance cooldown
pub fn limit_key(phone: &str) -> String {
    format!("limit_{}", phone)
}

/// `bl_<token>`: presence-only revoked session token
pub fn denylist_key(token: &str) -> String {
    format!("bl_{}", token)
}

/// Value written for presence-only markers
pub const MARKER_VALUE: &str = "true";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_layout() {
        assert_eq!(otp_key("+998901234567"), "otp_+998901234567");
        assert_eq!(limit_key("+998901234567"), "limit_+998901234567");
        assert_eq!(denylist_key("abc.def.ghi"), "bl_abc.def.ghi");
    }
}

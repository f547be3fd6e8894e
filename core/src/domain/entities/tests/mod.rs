mod otp_entry_tests;

//! User-facing Arabic strings.

/// First assistant message after the chat session is established.
pub const CHAT_GREETING: &str = "مرحباً! أنا مساعد شام الذكي. كيف يمكنني مساعدتك اليوم؟";

/// Replaces an assistant reply whose stream failed.
pub const CHAT_STREAM_ERROR: &str = "عذراً، حدث خطأ ما. يرجى المحاولة مرة أخرى.";

pub const NOTICE_SHAM_CASH: &str = "جاري معالجة إيداع شام كاش...";
pub const NOTICE_CRYPTO_WITHDRAW: &str = "جاري معالجة طلب السحب...";
pub const NOTICE_XRP_SEND: &str = "جاري إرسال XRP...";
pub const NOTICE_IBAN_COPIED: &str = "تم نسخ رقم الحساب الدولي (IBAN)!";
pub const NOTICE_ADDRESS_COPIED: &str = "تم نسخ العنوان!";
pub const NOTICE_ADD_TO_WALLET: &str = "جاري إضافة البطاقة إلى محفظة جوجل...";
pub const NOTICE_CHAT_BUSY: &str = "لا يمكن مسح المحادثة أثناء كتابة الرد.";

/// Notice shown when a scanned code carries a payment identity.
pub fn scanned_identity_notice(name: &str, account: &str) -> String {
    format!("تم مسح رمز الدفع لـ:\nالاسم: {name}\nالحساب: {account}")
}

/// Notice shown when a scanned code is not a payment identity.
pub fn scanned_raw_notice(text: &str) -> String {
    format!("تم مسح الرمز بنجاح:\n{text}")
}

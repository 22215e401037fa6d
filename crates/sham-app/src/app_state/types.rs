//! Screens, modals and the UI events parsed from terminal input.

use sham_platform::FrameError;

/// Bottom-navigation screens. Exactly one is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Crypto,
    Cards,
    Security,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "الرئيسية",
            Screen::Crypto => "العملات الرقمية",
            Screen::Cards => "البطاقات",
            Screen::Security => "الأمان",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    ShamCash,
    CryptoDeposit,
    CryptoWithdraw,
    XrpSend,
    MyCode,
    ScanPay,
}

impl Modal {
    pub fn title(self) -> &'static str {
        match self {
            Modal::ShamCash => "إيداع شام كاش",
            Modal::CryptoDeposit => "إيداع عملات رقمية",
            Modal::CryptoWithdraw => "سحب عملات رقمية",
            Modal::XrpSend => "إرسال XRP",
            Modal::MyCode => "رمزي",
            Modal::ScanPay => "امسح للدفع",
        }
    }
}

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Navigate(Screen),
    OpenChat,
    /// Close the chat overlay if it is open, otherwise the open modal.
    Close,
    /// Scroll the open chat transcript towards older turns.
    ScrollUp,
    ScrollDown,
    /// Forget the chat history once no reply is streaming.
    ClearChat,
    OpenModal(Modal),
    /// Confirm the open modal's action.
    Process,
    /// Choose a deposit coin; an empty symbol clears the selection.
    SelectCoin(String),
    CopyIban,
    CopyAddress,
    AddToWallet,
    /// One camera frame's decode result.
    Frame(Result<String, FrameError>),
    Submit(String),
    Help,
    Quit,
    Unknown(String),
}

pub(super) const HELP: &str = "\
/home /crypto /cards /security   switch screen
/chat                            open the assistant
/close                           close the assistant or the open dialog
/up /down /clear                 scroll or clear the assistant's history
/cash /deposit /withdraw /xrp    open a dialog
/mycode /scan                    show your code / scan someone else's
/process                         confirm the open dialog
/coin <SYMBOL>                   pick a deposit coin (empty clears)
/copy-iban /copy-address /wallet
/frame [text]                    feed one camera frame (no text: nothing found)
/help /quit";

impl UiEvent {
    /// Parse one input line.
    ///
    /// Commands start with `/`. While the chat overlay is open any other
    /// line is a chat submission; otherwise it is unknown. Blank lines
    /// outside the chat are ignored.
    pub fn parse(line: &str, chat_open: bool) -> Option<Self> {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix('/') else {
            if chat_open {
                return Some(UiEvent::Submit(line.to_string()));
            }
            if trimmed.is_empty() {
                return None;
            }
            return Some(UiEvent::Unknown(trimmed.to_string()));
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        let event = match name {
            "home" => UiEvent::Navigate(Screen::Home),
            "crypto" => UiEvent::Navigate(Screen::Crypto),
            "cards" => UiEvent::Navigate(Screen::Cards),
            "security" => UiEvent::Navigate(Screen::Security),
            "chat" => UiEvent::OpenChat,
            "close" => UiEvent::Close,
            "up" => UiEvent::ScrollUp,
            "down" => UiEvent::ScrollDown,
            "clear" => UiEvent::ClearChat,
            "cash" => UiEvent::OpenModal(Modal::ShamCash),
            "deposit" => UiEvent::OpenModal(Modal::CryptoDeposit),
            "withdraw" => UiEvent::OpenModal(Modal::CryptoWithdraw),
            "xrp" => UiEvent::OpenModal(Modal::XrpSend),
            "mycode" => UiEvent::OpenModal(Modal::MyCode),
            "scan" => UiEvent::OpenModal(Modal::ScanPay),
            "process" => UiEvent::Process,
            "coin" => UiEvent::SelectCoin(arg.to_string()),
            "copy-iban" => UiEvent::CopyIban,
            "copy-address" => UiEvent::CopyAddress,
            "wallet" => UiEvent::AddToWallet,
            "frame" if arg.is_empty() => UiEvent::Frame(Err(FrameError::NotFound)),
            "frame" => UiEvent::Frame(Ok(arg.to_string())),
            "help" => UiEvent::Help,
            "quit" | "exit" => UiEvent::Quit,
            _ => UiEvent::Unknown(trimmed.to_string()),
        };
        Some(event)
    }
}

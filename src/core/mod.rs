pub mod coordinator;
pub mod error;
pub mod intent;
pub mod view_state;

pub use coordinator::Coordinator;
pub use error::FetchError;
pub use intent::{Effect, Intent};
pub use view_state::{
    DismissAction, Notice, NoticeLevel, Payload, QrView, ScannerView, SegmentView,
    SelectionAlert, ViewState, WalletDetailState, WalletListView,
};

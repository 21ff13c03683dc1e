pub mod markup;
pub mod transactions_page;
pub mod view;
pub mod view_state;

pub use transactions_page::{MutationOutcome, PageServices, TransactionsPage};
pub use view::{PageAction, PageView};
pub use view_state::{RenderToken, ViewState};

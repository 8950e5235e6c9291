pub mod address;
pub mod customer;
pub mod order;
pub mod platform;
pub mod product;
pub mod state;

pub use address::AddressRecord;
pub use customer::CustomerRecord;
pub use order::{OrderContext, OrderLine, OrderTotals};
pub use platform::{PlatformInfo, RequestContext};
pub use product::ProductRecord;
pub use state::OrderState;

pub mod event;
pub mod order;
pub mod selection;
pub mod ticket;

pub use event::{EventDetail, EventSnapshot, Organizer, TicketTier};
pub use order::{
    CompleteOrderRequest, CompleteOrderResponse, CreateOrderRequest, CreateOrderResponse, Order,
    OrderItem, PAYMENT_METHOD_CARD,
};
pub use selection::CheckoutSelection;
pub use ticket::IssuedTicket;

//! Checkout: validates a cart and contact details, then places the order.
//!
//! [`Checkout`] takes `&self` everywhere and keeps its state in cells, so a
//! second `place_order` polled on the same task while the first is awaiting
//! the backend sees the in-flight flag and is refused.

use std::cell::{Cell, RefCell};

use giftshop_core::{
    price_line, Cart, CartLineItem, Id, OrderItemAttributeRequest, OrderItemAttributeValueRequest,
    OrderItemRequest, OrderRequest,
};

use crate::client::ShopClient;
use crate::error::CheckoutError;

/// Outcome of a successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    /// Backend order id, when the response carried one.
    pub order_id: Option<Id>,
    pub total_price: f64,
}

/// Contact details and in-flight state for one checkout screen.
#[derive(Debug, Default)]
pub struct Checkout {
    guest_email: RefCell<String>,
    guest_phone: RefCell<String>,
    user_id: RefCell<Option<Id>>,
    placing: Cell<bool>,
}

impl Checkout {
    /// A guest checkout with empty contact fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A checkout for a signed-in user; no guest contact is required.
    #[must_use]
    pub fn for_user(user_id: Id) -> Self {
        let checkout = Self::default();
        checkout.set_user_id(Some(user_id));
        checkout
    }

    pub fn set_guest_email(&self, email: &str) {
        email.clone_into(&mut self.guest_email.borrow_mut());
    }

    pub fn set_guest_phone(&self, phone: &str) {
        phone.clone_into(&mut self.guest_phone.borrow_mut());
    }

    pub fn set_user_id(&self, user_id: Option<Id>) {
        *self.user_id.borrow_mut() = user_id;
    }

    #[must_use]
    pub fn guest_email(&self) -> String {
        self.guest_email.borrow().clone()
    }

    #[must_use]
    pub fn guest_phone(&self) -> String {
        self.guest_phone.borrow().clone()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<Id> {
        self.user_id.borrow().clone()
    }

    /// `true` while an order submission is awaiting the backend.
    #[must_use]
    pub fn is_placing(&self) -> bool {
        self.placing.get()
    }

    /// Checks everything that can be checked without the backend.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::AlreadyPlacing`] while a submission is in flight.
    /// - [`CheckoutError::EmptyCart`] if the cart has no lines.
    /// - [`CheckoutError::MissingGuestContact`] for a guest checkout whose
    ///   email or phone is blank.
    pub fn validate(&self, cart: &Cart) -> Result<(), CheckoutError> {
        if self.placing.get() {
            return Err(CheckoutError::AlreadyPlacing);
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if self.user_id.borrow().is_none()
            && (self.guest_email.borrow().trim().is_empty()
                || self.guest_phone.borrow().trim().is_empty())
        {
            return Err(CheckoutError::MissingGuestContact);
        }
        Ok(())
    }

    /// Builds the order body from the cart's current contents.
    ///
    /// Line figures come from [`price_line`], the same function the cart
    /// total uses, so the submitted total always matches the displayed one.
    #[must_use]
    pub fn build_order_request(&self, cart: &Cart) -> OrderRequest {
        let order_items: Vec<OrderItemRequest> = cart.lines().iter().map(order_item).collect();
        let total_price = order_items
            .iter()
            .map(|item| item.line_total_price + item.line_tax)
            .sum();

        let user_id = self.user_id();
        let (guest_email, guest_phone) = if user_id.is_some() {
            (None, None)
        } else {
            (
                Some(self.guest_email.borrow().trim().to_owned()),
                Some(self.guest_phone.borrow().trim().to_owned()),
            )
        };

        OrderRequest {
            user_id,
            guest_email,
            guest_phone,
            order_items,
            total_price,
        }
    }

    /// Validates, submits, and on success empties the cart.
    ///
    /// The cart and contact fields are only touched after the backend accepts
    /// the order; any failure leaves them as they were so the shopper can
    /// retry.
    ///
    /// # Errors
    ///
    /// Any error from [`Checkout::validate`], or [`CheckoutError::Client`]
    /// when the submission fails.
    pub async fn place_order(
        &self,
        cart: &RefCell<Cart>,
        client: &ShopClient,
    ) -> Result<PlacedOrder, CheckoutError> {
        let request = {
            let cart = cart.borrow();
            self.validate(&cart)?;
            self.build_order_request(&cart)
        };

        let _placing = PlacingGuard::engage(&self.placing);
        let order_id = client.place_order(&request).await?;

        cart.borrow_mut().clear();
        self.guest_email.borrow_mut().clear();
        self.guest_phone.borrow_mut().clear();

        Ok(PlacedOrder {
            order_id,
            total_price: request.total_price,
        })
    }
}

/// Holds the in-flight flag for as long as it lives.
struct PlacingGuard<'a>(&'a Cell<bool>);

impl<'a> PlacingGuard<'a> {
    fn engage(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for PlacingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

fn order_item(line: &CartLineItem) -> OrderItemRequest {
    let breakdown = price_line(line);
    OrderItemRequest {
        product_id: line.product_id.clone(),
        quantity: breakdown.quantity,
        base_price: breakdown.base_price,
        extra_price: breakdown.extras,
        line_total_price: breakdown.line_subtotal,
        line_tax: breakdown.line_tax,
        tax_rate: line.tax_rate,
        order_item_attribute_request_list: line
            .selected_attributes
            .iter()
            .map(|selected| OrderItemAttributeRequest {
                product_attribute_id: selected.product_attribute_id.clone(),
                order_item_attribute_value_request_list: vec![OrderItemAttributeValueRequest {
                    product_attribute_value_id: selected.product_attribute_value_id.clone(),
                    custom_text: None,
                    file_url: None,
                    extra_price: selected.extra_price,
                }],
            })
            .collect(),
    }
}

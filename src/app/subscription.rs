// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::swipeable::{self, Props};
use iced::Subscription;

/// Window frames for the swipeable element, active only while it animates
/// or shows the spinner.
pub fn create_frame_subscription(swipe: &swipeable::State, props: Props) -> Subscription<Message> {
    swipe.subscription(props).map(Message::Swipe)
}

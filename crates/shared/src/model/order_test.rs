use super::order::OrderStatus;

#[test]
fn pending_can_move_to_awaiting_confirmation() {
    assert!(OrderStatus::Pending.can_transition_to(OrderStatus::AwaitingConfirmation));
}

#[test]
fn awaiting_confirmation_can_move_to_paid() {
    assert!(OrderStatus::AwaitingConfirmation.can_transition_to(OrderStatus::Paid));
}

#[test]
fn mark_paid_shortcut_is_legal_from_pending() {
    assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Paid));
}

#[test]
fn paid_is_terminal() {
    assert!(!OrderStatus::Paid.can_transition_to(OrderStatus::Pending));
    assert!(!OrderStatus::Paid.can_transition_to(OrderStatus::AwaitingConfirmation));
    assert!(!OrderStatus::Paid.can_transition_to(OrderStatus::Paid));
}

#[test]
fn backwards_moves_are_illegal() {
    assert!(!OrderStatus::AwaitingConfirmation.can_transition_to(OrderStatus::Pending));
    assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Pending));
}

#[test]
fn status_labels_round_trip() {
    for status in [
        OrderStatus::Pending,
        OrderStatus::AwaitingConfirmation,
        OrderStatus::Paid,
    ] {
        let label = status.as_str();
        let parsed: OrderStatus = label.parse().expect("label should parse");
        assert_eq!(parsed, status);
    }
}

#[test]
fn status_labels_match_wire_format() {
    assert_eq!(OrderStatus::Pending.as_str(), "pending");
    assert_eq!(
        OrderStatus::AwaitingConfirmation.as_str(),
        "awaiting_confirmation"
    );
    assert_eq!(OrderStatus::Paid.as_str(), "paid");

    let json = serde_json::to_value(OrderStatus::AwaitingConfirmation).unwrap();
    assert_eq!(json, serde_json::json!("awaiting_confirmation"));
}

#[test]
fn unknown_status_fails_to_parse() {
    assert!("refunded".parse::<OrderStatus>().is_err());
    assert!("Paid".parse::<OrderStatus>().is_err());
}

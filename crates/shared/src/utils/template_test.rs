use super::template::{EmailTemplateData, render_email};

#[test]
fn rendered_email_contains_the_reset_link() {
    let data = EmailTemplateData {
        title: "Password reset".to_string(),
        message: "We received a request to reset your password.".to_string(),
        button: "Reset password".to_string(),
        link: "https://store.example.com/reset-password?token=abc123".to_string(),
    };

    let html = render_email(&data).expect("render");

    assert!(html.contains("Password reset"));
    assert!(html.contains("https://store.example.com/reset-password?token=abc123"));
    assert!(html.contains("Reset password"));
}

#[test]
fn rendered_email_escapes_html_in_user_content() {
    let data = EmailTemplateData {
        title: "<script>alert(1)</script>".to_string(),
        message: "hello".to_string(),
        button: "Go".to_string(),
        link: "https://store.example.com".to_string(),
    };

    let html = render_email(&data).expect("render");

    assert!(!html.contains("<script>alert(1)</script>"));
}

mod common;

use common::fixtures::*;
use common::{TestResult, render_html};
use courrier::TRACKING_PIXEL_TOKEN;

#[test]
fn shell_carries_client_compatibility_headers() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![header("a", "Bonjour", 0.0, 0.0, 300.0, 100.0)]);
    let html = render_html(&doc)?;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_html_contains!(html, "<meta charset=\"utf-8\" />");
    assert_html_contains!(html, "name=\"viewport\"");
    assert_html_contains!(html, "OfficeDocumentSettings");
    assert_html_contains!(html, "@media only screen and (max-width: 600px)");
    Ok(())
}

#[test]
fn tracking_pixel_token_appears_exactly_once() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![
        header("a", "Un", 0.0, 0.0, 300.0, 100.0),
        button("b", "Acheter", "https://example.com", 0.0, 300.0, 200.0, 60.0),
    ]);
    let html = render_html(&doc)?;
    assert_html_count!(html, TRACKING_PIXEL_TOKEN, 1);
    let token_at = html.find(TRACKING_PIXEL_TOKEN).unwrap();
    let body_close_at = html.find("</body>").unwrap();
    assert!(token_at < body_close_at, "token must sit before </body>");
    Ok(())
}

#[test]
fn button_renders_vml_for_outlook_and_table_for_the_rest() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![button(
        "cta",
        "Acheter",
        "https://shop.example.com",
        100.0,
        0.0,
        200.0,
        60.0,
    )]);
    let html = render_html(&doc)?;
    assert_html_contains!(html, "<!--[if mso]>");
    assert_html_contains!(html, "v:roundrect");
    assert_html_contains!(html, "<a href=\"https://shop.example.com\"");
    Ok(())
}

#[test]
fn image_without_source_renders_placeholder_and_warns() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut block = positioned("image", "img", 0.0, 0.0, 300.0, 200.0);
    block["content"] = serde_json::json!({});
    let rendered = common::render_document(&document(vec![block]))?;
    assert_html_contains!(rendered.html, "Image non disponible");
    assert!(rendered.warnings.iter().any(|w| w.block_id.as_deref() == Some("img")));
    Ok(())
}

#[test]
fn image_with_source_is_sized_from_canvas_position() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![image(
        "img",
        "https://cdn.example.com/banner.png",
        0.0,
        0.0,
        400.0,
        200.0,
    )]);
    let html = render_html(&doc)?;
    // 400px block minus the 20px padding allowance.
    assert_html_contains!(html, "width=\"380\"");
    assert_html_contains!(html, "https://cdn.example.com/banner.png");
    Ok(())
}

#[test]
fn unknown_block_type_renders_placeholder_without_aborting() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![
        positioned("carousel", "weird", 0.0, 0.0, 300.0, 100.0),
        header("after", "Toujours là", 0.0, 300.0, 300.0, 100.0),
    ]);
    let html = render_html(&doc)?;
    assert_html_contains!(html, "Bloc non reconnu");
    assert_html_contains!(html, "Toujours là");
    Ok(())
}

#[test]
fn header_falls_back_to_primary_color_and_placeholder_title() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![positioned("header", "h", 0.0, 0.0, 300.0, 100.0)]);
    let html = render_html(&doc)?;
    assert_html_contains!(html, "Titre");
    assert_html_contains!(html, "color:#007bff");
    Ok(())
}

#[test]
fn global_background_color_reaches_the_body() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut doc = document(vec![]);
    doc["globalStyles"]["backgroundColor"] = serde_json::json!("#123456");
    let html = render_html(&doc)?;
    assert_html_contains!(html, "background-color:#123456");
    Ok(())
}

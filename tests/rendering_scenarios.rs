//! End-to-end rendering scenarios taken from real product content.
//!
//! Each test goes from a content item (built in code or decoded from JSON)
//! through rendering to tap resolution and command mapping.

use std::sync::Once;

use richlabel::{
    Action, ActionHandler, ActionKind, Command, ContentItem, ContentModifier, FontWeight,
    Interaction, LinkPool, RenderOptions, RenderPath, Renderer, Rgba, Style, TapMap,
    TextDecoration, ToastDispatcher, render,
};
use tracing::info;

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

const SUBTITLE_JSON: &str = r##"{
    "type": "text",
    "label": "This medicine is not $VAR$. For full details on our returns policies",
    "modifiers": [
        {"type": "color", "identifier": "$VAR$", "displayText": "$VAR$", "color": "#346ab2"},
        {"type": "bold", "identifier": "$VAR$", "displayText": "$VAR$"},
        {
            "type": "link",
            "identifier": "$VAR$",
            "displayText": "$VAR$",
            "interaction": {
                "onPressEvent": {
                    "action": {"type": "show_toast", "data": {"extra": {"message": "Word clicked"}}},
                    "pelEvent": {"event": "return_policy_click"}
                }
            }
        },
        {"type": "underline", "identifier": "returnable", "displayText": "returnable"}
    ]
}"##;

fn plain_cta() -> ContentItem {
    ContentItem::text("$CTA$").with_modifiers([
        ContentModifier::bold("$CTA$", "$CTA$"),
        ContentModifier::color("$CTA$", "$CTA$", "#000"),
        ContentModifier::link("$CTA$", "$CTA$", Action::show_toast("Action Performed")),
        ContentModifier::underline("$CTA$", "Read More"),
    ])
}

// ============================================================================
// Webview Subtitle
// ============================================================================

#[test]
fn test_webview_subtitle_segments() {
    setup_test_logging();
    let item = ContentItem::from_json(SUBTITLE_JSON).unwrap();
    let rendered = render(&item).unwrap();
    info!(text = %rendered.text(), "rendered subtitle");

    assert_eq!(rendered.path, RenderPath::Rich);
    let texts: Vec<_> = rendered.segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(
        texts,
        [
            "This medicine is not ",
            "returnable",
            ". For full details on our returns policies"
        ]
    );

    let [before, middle, after] = rendered.segments.as_slice() else {
        panic!("expected three segments");
    };
    assert!(!before.actionable && before.style.is_none());
    assert!(!after.actionable && after.style.is_none());
    assert!(middle.actionable);

    let style = middle.style.unwrap();
    assert_eq!(style.color, Some(Rgba::rgb(0x34, 0x6a, 0xb2)));
    assert_eq!(style.font_weight, Some(FontWeight::BOLD));
    assert_eq!(style.decoration, Some(TextDecoration::UNDERLINE));
}

#[test]
fn test_webview_subtitle_tap() {
    setup_test_logging();
    let item = ContentItem::from_json(SUBTITLE_JSON).unwrap();
    let rendered = render(&item).unwrap();

    let action = rendered.resolve_tap(25).unwrap();
    assert_eq!(action.kind, ActionKind::ShowToast);
    assert_eq!(action.message(), Some("Word clicked"));

    assert!(rendered.resolve_tap(5).is_none());
    assert!(rendered.resolve_tap(50).is_none());
}

#[test]
fn test_webview_subtitle_telemetry_is_untouched() {
    let item = ContentItem::from_json(SUBTITLE_JSON).unwrap();
    let link = &item.modifiers[2];
    let press = link.interaction.as_ref().and_then(|i| i.on_press.as_ref()).unwrap();
    assert_eq!(
        press.pel_event.get("event"),
        Some(&serde_json::json!("return_policy_click"))
    );
}

// ============================================================================
// Plain CTA
// ============================================================================

#[test]
fn test_plain_cta() {
    setup_test_logging();
    let rendered = render(&plain_cta()).unwrap();

    assert_eq!(rendered.path, RenderPath::Plain);
    assert_eq!(rendered.text(), "Read More");
    assert_eq!(rendered.segments.len(), 1);

    let segment = &rendered.segments[0];
    assert!(segment.actionable);
    let style = segment.style.unwrap();
    assert!(style.is_bold());
    assert_eq!(style.color, Some(Rgba::BLACK));
    assert_eq!(style.decoration, Some(TextDecoration::UNDERLINE));

    for offset in 0..9 {
        assert_eq!(
            rendered.resolve_tap(offset).and_then(Action::message),
            Some("Action Performed")
        );
    }
    assert!(rendered.resolve_tap(9).is_none());
}

#[test]
fn test_plain_cta_dispatches_toast() {
    let rendered = render(&plain_cta()).unwrap();
    let action = rendered.resolve_tap(3).unwrap();

    let mut shown = Vec::new();
    let mut dispatcher = ToastDispatcher::new(|message: &str| shown.push(message.to_string()));
    dispatcher.dispatch(action);
    drop(dispatcher);
    assert_eq!(shown, ["Action Performed"]);
}

// ============================================================================
// No Modifiers
// ============================================================================

#[test]
fn test_no_modifier_label() {
    let rendered = render(&ContentItem::text("By USV Private Limited")).unwrap();
    assert_eq!(rendered.path, RenderPath::Plain);
    assert_eq!(rendered.text(), "By USV Private Limited");
    assert_eq!(rendered.segments[0].style, None);
    assert!(rendered.actionable_segment().is_none());
    assert!(rendered.item_action.is_none());
    assert!((0..30).all(|offset| rendered.resolve_tap(offset).is_none()));
}

// ============================================================================
// Style Resolution Through Rendering
// ============================================================================

#[test]
fn test_duplicate_modifiers_first_match_wins() {
    let item = ContentItem::text("Price: $P$ only").with_modifiers([
        ContentModifier::bold("$P$", "$P$"),
        ContentModifier::size("$P$", "$P$", 22.0),
        ContentModifier::size("$P$", "$P$", 9.0),
        ContentModifier::bold("$P$", "₹42"),
    ]);
    let rendered = render(&item).unwrap();
    let style = rendered.segments[1].style.unwrap();
    assert_eq!(rendered.segments[1].text, "₹42");
    assert_eq!(style.font_size, Some(22.0));
    assert_eq!(style.font_weight, Some(FontWeight::BOLD));
}

#[test]
fn test_underline_beats_strikethrough() {
    let item = ContentItem::text("MRP $MRP$").with_modifiers([
        ContentModifier::strikethrough("$MRP$", "$MRP$"),
        ContentModifier::underline("$MRP$", "₹99"),
    ]);
    let style = render(&item).unwrap().segments[1].style.unwrap();
    assert_eq!(style.decoration, Some(TextDecoration::UNDERLINE));
}

#[test]
fn test_base_style_falls_through() {
    let base = Style::builder().font_size(13.0).color(Rgba::rgb(0x44, 0x44, 0x44)).build();
    let renderer = Renderer::new(RenderOptions::default().base_style(base));
    let rendered = renderer.render(&plain_cta()).unwrap();
    let style = rendered.segments[0].style.unwrap();
    assert_eq!(style.font_size, Some(13.0));
    assert_eq!(style.color, Some(Rgba::BLACK));
    assert_eq!(rendered.base_style, Some(base));
}

// ============================================================================
// Whole-Item Click and Tap Map
// ============================================================================

#[test]
fn test_whole_item_click() {
    let item = ContentItem::text("Return Policy")
        .with_interaction(Interaction::on_press(Action::new("share_cta").with_url("https://example.com")));
    let rendered = render(&item).unwrap();
    let action = rendered.resolve_tap(0).unwrap();
    assert!(matches!(
        Command::from_action(action),
        Command::Share { url: Some(url), .. } if url == "https://example.com"
    ));
}

#[test]
fn test_rich_without_link_is_annotated_but_inert() {
    let item = ContentItem::text("Only $N$ left")
        .with_modifier(ContentModifier::bold("$N$", "3"))
        .with_interaction(Interaction::on_press(Action::new("on_cart_clicked")));
    let rendered = render(&item).unwrap();
    assert!(rendered.segments[1].actionable);
    assert!(rendered.resolve_tap(5).is_none());
    assert_eq!(
        rendered.item_action.as_ref().map(|a| &a.kind),
        Some(&ActionKind::OnCartClicked)
    );
}

#[test]
fn test_tap_map_matches_segment_search() {
    let item = ContentItem::from_json(SUBTITLE_JSON).unwrap();
    let rendered = render(&item).unwrap();
    let mut pool = LinkPool::new();
    let map = TapMap::from_rendered(&rendered, &mut pool);

    for offset in 0..rendered.len_chars() {
        let via_map = map.test(offset).and_then(|id| pool.get(id));
        assert_eq!(via_map, rendered.resolve_tap(offset), "offset {offset}");
    }
}

// ============================================================================
// Batches and Idempotence
// ============================================================================

#[test]
fn test_render_all_isolates_bad_items() {
    let items = vec![
        ContentItem::from_json(SUBTITLE_JSON).unwrap(),
        ContentItem::new("text"),
        plain_cta(),
    ];
    let rendered = Renderer::default().render_all(&items);
    assert_eq!(rendered[0].path, RenderPath::Rich);
    assert_eq!(rendered[1].path, RenderPath::Placeholder);
    assert!(rendered[1].is_empty());
    assert_eq!(rendered[2].text(), "Read More");
}

#[test]
fn test_pipeline_is_idempotent() {
    let item = ContentItem::from_json(SUBTITLE_JSON).unwrap();
    let first = render(&item).unwrap();
    let second = render(&item).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.resolve_tap(25), second.resolve_tap(25));
}

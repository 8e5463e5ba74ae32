//! Attune demo
//!
//! Scripted console walkthrough of the two coordinators: a pet-adoption
//! form driven through an invalid and a valid submit, and a three-tab
//! strip exercising roving-focus keyboard navigation and child-set
//! reconciliation.

use attune_core::{
    BoundField, FieldValue, Form, FormOptions, Key, KeyOutcome, Result, TabItem, TabStrip,
    Validator,
};

fn main() -> Result<()> {
    attune_core::init_logging();

    run_form_walkthrough()?;
    run_tabs_walkthrough()?;

    Ok(())
}

fn run_form_walkthrough() -> Result<()> {
    tracing::info!("Starting form walkthrough");
    println!("== Pet adoption form ==");

    let form = Form::new(FormOptions::default());

    let pet_name = BoundField::new(
        "petName",
        &form,
        vec![
            Validator::required("Pet name is required"),
            Validator::min_len(6, "Pet name must be at least 6 characters"),
        ],
    );
    let pet_type = BoundField::new(
        "petType",
        &form,
        vec![Validator::required("Please choose a pet type")],
    );

    pet_name.register(FieldValue::default());
    pet_type.register(FieldValue::default());

    // First submit attempt on an untouched form: the raw-submit path fires
    // with every entry so the host can focus its error block, and field
    // errors become visible.
    let submission = form.submit();
    assert!(submission.data.is_none());
    println!("first submit valid: {}", submission.all_valid);
    for name in ["petName", "petType"] {
        if form.show_error(name) {
            println!("  {}: {}", name, form.error_text(name));
        }
    }

    // The user fills the form in; each write revalidates through the
    // field's own validator list.
    pet_name.set_value(FieldValue::text("Reginald"));
    pet_type.set_value(FieldValue::text("dog"));

    let submission = form.submit();
    let payload = submission.data.expect("form is valid now");
    println!(
        "second submit payload: {}",
        serde_json::to_string_pretty(&payload)?
    );

    Ok(())
}

fn run_tabs_walkthrough() -> Result<()> {
    tracing::info!("Starting tab strip walkthrough");
    println!("== Tab strip ==");

    let strip = TabStrip::with_children(&[
        TabItem::new("Dogs", "dogs"),
        TabItem::new("Cats", "cats"),
        TabItem::new("Birds", "birds"),
    ]);

    let active = strip.active().expect("non-empty strip has a selection");
    println!("initial tab: {}", active.name);

    // Arrow right across all three tabs wraps back to the first.
    for _ in 0..3 {
        if let KeyOutcome::FocusTab { name, .. } = strip.handle_key(Key::ArrowRight) {
            println!("arrow right -> {}", name);
        }
    }

    // Arrow down hands focus to the active tab's panel.
    if let KeyOutcome::FocusPanel { panel_id } = strip.handle_key(Key::ArrowDown) {
        println!("arrow down -> panel {}", panel_id);
    }

    // Click the second tab, then rename the third child: ids regenerate
    // but the selection survives by name.
    let cats = strip.descriptors()[1].tab_id.clone();
    let activated = strip.select(&cats)?;
    println!("clicked -> {}", activated);

    strip.reconcile(&[
        TabItem::new("Dogs", "dogs"),
        TabItem::new("Cats", "cats"),
        TabItem::new("Fish", "fish"),
    ]);
    println!(
        "after children changed, active tab: {}",
        strip.active().expect("selection preserved").name
    );

    Ok(())
}

//! Full lifecycle of the product form, the entity with every field shape:
//! text, money, selects backed by reference lists, flags, and an image list.

use chrono::Utc;
use entities::models::product::{Product, ProductImage};
use forms::drafts::ProductDraft;
use forms::{
    Effect, FormController, MutationOutcome, MutationRequest, ReferenceItem, ReferenceLists,
};
use uuid::Uuid;

fn references() -> (ReferenceLists, Uuid, Uuid, Uuid) {
    let category_id = Uuid::new_v4();
    let color_id = Uuid::new_v4();
    let size_id = Uuid::new_v4();
    let lists = ReferenceLists::default()
        .with("categories", vec![ReferenceItem::new(category_id, "Shirts")])
        .with("colors", vec![ReferenceItem::new(color_id, "Slate")])
        .with("sizes", vec![ReferenceItem::new(size_id, "Small")]);
    (lists, category_id, color_id, size_id)
}

fn product(store_id: Uuid, category_id: Uuid, color_id: Uuid, size_id: Uuid) -> Product {
    Product {
        id: Uuid::new_v4(),
        store_id,
        category_id,
        size_id,
        color_id,
        name: "Tee".to_string(),
        price: 19.99,
        is_featured: false,
        is_archived: false,
        images: vec![ProductImage {
            id: Uuid::new_v4(),
            url: "https://cdn.example/front.png".to_string(),
        }],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn fill(draft: &mut ProductDraft, category_id: Uuid, color_id: Uuid, size_id: Uuid) {
    draft.name = "Tee".to_string();
    draft.price = 19.99;
    draft.category_id = Some(category_id);
    draft.color_id = Some(color_id);
    draft.size_id = Some(size_id);
}

#[test]
fn create_mode_dispatches_create_and_never_update() {
    let (lists, category_id, color_id, size_id) = references();
    let mut controller: FormController<ProductDraft> =
        FormController::new(Uuid::new_v4(), None, lists);
    fill(controller.draft_mut(), category_id, color_id, size_id);

    let effects = controller.submit();
    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::Mutate(MutationRequest::Create { payload }) => {
            assert_eq!(payload.name, "Tee");
            assert_eq!(payload.category_id, category_id);
        }
        other => panic!("expected create dispatch, got {other:?}"),
    }
}

#[test]
fn edit_mode_dispatches_update_targeting_entity_id() {
    let (lists, category_id, color_id, size_id) = references();
    let store_id = Uuid::new_v4();
    let entity = product(store_id, category_id, color_id, size_id);
    let mut controller: FormController<ProductDraft> =
        FormController::new(store_id, Some(&entity), lists);
    controller.draft_mut().price = 24.99;

    let effects = controller.submit();
    match &effects[0] {
        Effect::Mutate(MutationRequest::Update { id, payload }) => {
            assert_eq!(*id, entity.id);
            assert_eq!(payload.price, 24.99);
            assert_eq!(payload.images.len(), 1);
        }
        other => panic!("expected update dispatch, got {other:?}"),
    }
}

#[test]
fn submit_while_loading_is_a_no_op() {
    let (lists, category_id, color_id, size_id) = references();
    let mut controller: FormController<ProductDraft> =
        FormController::new(Uuid::new_v4(), None, lists);
    fill(controller.draft_mut(), category_id, color_id, size_id);

    assert_eq!(controller.submit().len(), 1);
    assert!(controller.is_loading());
    assert!(controller.submit().is_empty());
    assert!(controller.submit().is_empty());
}

#[test]
fn invalid_draft_never_reaches_the_network() {
    let mut controller: FormController<ProductDraft> =
        FormController::new(Uuid::new_v4(), None, ReferenceLists::default());

    let effects = controller.submit();
    assert!(effects.is_empty());
    assert!(!controller.is_loading());
    assert!(!controller.field_errors().is_empty());
}

#[test]
fn create_success_refreshes_navigates_and_toasts_once() {
    let (lists, category_id, color_id, size_id) = references();
    let store_id = Uuid::new_v4();
    let mut controller: FormController<ProductDraft> = FormController::new(store_id, None, lists);
    fill(controller.draft_mut(), category_id, color_id, size_id);

    controller.submit();
    let effects = controller.resolve_submit(MutationOutcome::Success);
    assert_eq!(
        effects,
        vec![
            Effect::RefreshListing,
            Effect::Navigate(format!("/{store_id}/products")),
            Effect::NotifySuccess("Product created".to_string()),
        ]
    );
    assert!(!controller.is_loading());
}

#[test]
fn mutation_failure_preserves_the_draft_exactly() {
    let (lists, category_id, color_id, size_id) = references();
    let mut controller: FormController<ProductDraft> =
        FormController::new(Uuid::new_v4(), None, lists);
    fill(controller.draft_mut(), category_id, color_id, size_id);
    let draft_before = controller.draft().clone();

    controller.submit();
    let effects = controller.resolve_submit(MutationOutcome::Failure);

    assert_eq!(
        effects,
        vec![Effect::NotifyFailure("Something went wrong".to_string())]
    );
    assert!(!controller.is_loading());
    assert_eq!(controller.draft(), &draft_before);
    assert!(
        !effects
            .iter()
            .any(|effect| matches!(effect, Effect::Navigate(_)))
    );
}

#[test]
fn cancelled_delete_makes_no_network_calls() {
    let (lists, category_id, color_id, size_id) = references();
    let store_id = Uuid::new_v4();
    let entity = product(store_id, category_id, color_id, size_id);
    let mut controller: FormController<ProductDraft> =
        FormController::new(store_id, Some(&entity), lists);

    controller.request_delete();
    assert!(controller.confirm_open());
    controller.cancel_delete();
    assert!(!controller.confirm_open());
    assert!(controller.confirm_delete().is_empty());
    assert!(!controller.is_loading());
}

#[test]
fn confirmed_delete_sequence_for_a_known_id() {
    let (lists, category_id, color_id, size_id) = references();
    let store_id = Uuid::new_v4();
    let entity = product(store_id, category_id, color_id, size_id);
    let mut controller: FormController<ProductDraft> =
        FormController::new(store_id, Some(&entity), lists);

    controller.request_delete();
    let effects = controller.confirm_delete();
    assert_eq!(
        effects,
        vec![Effect::Mutate(MutationRequest::Delete { id: entity.id })]
    );

    let effects = controller.resolve_delete(MutationOutcome::Success);
    assert_eq!(effects[1], Effect::Navigate(format!("/{store_id}/products")));
    assert!(!controller.confirm_open());
}

#[test]
fn reference_lists_are_exposed_unchanged() {
    let (lists, category_id, _, _) = references();
    let controller: FormController<ProductDraft> =
        FormController::new(Uuid::new_v4(), None, lists);

    let categories = controller.references().get("categories");
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, category_id);
    assert_eq!(categories[0].display_name, "Shirts");
    assert!(controller.references().get("billboards").is_empty());
}

#[test]
fn image_list_edits_are_referentially_independent() {
    let (lists, category_id, color_id, size_id) = references();
    let store_id = Uuid::new_v4();
    let entity = product(store_id, category_id, color_id, size_id);
    let mut controller: FormController<ProductDraft> =
        FormController::new(store_id, Some(&entity), lists);

    let snapshot = controller.draft().images.clone();
    let appended = controller.draft().images_with("https://cdn.example/back.png");
    controller.draft_mut().images = appended;

    assert_eq!(snapshot, vec!["https://cdn.example/front.png".to_string()]);
    assert_eq!(controller.draft().images.len(), 2);
}

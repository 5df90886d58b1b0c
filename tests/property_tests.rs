//! Property-based tests for presentation edits.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated edit sequences.

use proptest::prelude::*;
use slidestore::core::{
    check_invariants, Background, ContentElement, Position, Presentation, SequentialIdGenerator,
    Size, UuidGenerator,
};
use slidestore::edit::{Edit, EditOutcome};
use std::collections::HashSet;

fn base_presentation() -> Presentation {
    Presentation::new("Deck").add_slide().add_slide()
}

prop_compose! {
    fn arbitrary_slide_id()(n in 1..6usize) -> String {
        if n == 5 {
            "nonexistent".to_string()
        } else {
            format!("slide{n}")
        }
    }
}

prop_compose! {
    fn arbitrary_element_id()(n in 1..8usize) -> String {
        format!("el-{n}")
    }
}

prop_compose! {
    fn arbitrary_element()(
        is_text in any::<bool>(),
        x in -500.0..500.0f64,
        y in -500.0..500.0f64,
    ) -> ContentElement {
        if is_text {
            ContentElement::text("text", "Arial", Position::new(x, y), Size::new(100.0, 20.0))
        } else {
            ContentElement::image("img.png", Position::new(x, y), Size::new(50.0, 50.0))
        }
    }
}

fn arbitrary_edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        "[a-z ]{0,12}".prop_map(|title| Edit::RenameTitle { title }),
        Just(Edit::AddSlide),
        arbitrary_slide_id().prop_map(|slide_id| Edit::DeleteSlide { slide_id }),
        (0..6usize).prop_map(|new_index| Edit::ChangeSlidePosition { new_index }),
        (arbitrary_slide_id(), arbitrary_element())
            .prop_map(|(slide_id, element)| Edit::AddContent { slide_id, element }),
        (arbitrary_slide_id(), arbitrary_element_id())
            .prop_map(|(slide_id, element_id)| Edit::RemoveContent { slide_id, element_id }),
        (arbitrary_slide_id(), arbitrary_element_id(), -100.0..100.0f64).prop_map(
            |(slide_id, element_id, x)| Edit::MoveElement {
                slide_id,
                element_id,
                position: Position::new(x, x),
            }
        ),
        (arbitrary_slide_id(), arbitrary_element_id(), 0.0..100.0f64).prop_map(
            |(slide_id, element_id, w)| Edit::ResizeElement {
                slide_id,
                element_id,
                size: Size::new(w, w),
            }
        ),
        (arbitrary_slide_id(), arbitrary_element_id()).prop_map(|(slide_id, element_id)| {
            Edit::SetText {
                slide_id,
                element_id,
                value: "changed".to_string(),
            }
        }),
        (arbitrary_slide_id(), arbitrary_element_id()).prop_map(|(slide_id, element_id)| {
            Edit::SetFontFamily {
                slide_id,
                element_id,
                font_family: "Oxygen".to_string(),
            }
        }),
        arbitrary_slide_id().prop_map(|slide_id| Edit::SetBackground {
            slide_id,
            background: Background::image("bg.png"),
        }),
    ]
}

fn apply_all(edits: &[Edit], ids: &SequentialIdGenerator) -> Presentation {
    edits.iter().fold(base_presentation(), |doc, edit| {
        edit.apply(&doc, ids).into_presentation()
    })
}

proptest! {
    #[test]
    fn edits_never_mutate_their_input(
        history in prop::collection::vec(arbitrary_edit(), 0..15),
        edit in arbitrary_edit(),
    ) {
        let ids = SequentialIdGenerator::new("el");
        let doc = apply_all(&history, &ids);
        let snapshot = doc.clone();

        let _ = edit.apply(&doc, &ids);

        prop_assert_eq!(doc, snapshot);
    }

    #[test]
    fn unapplied_edits_return_an_equal_document(
        history in prop::collection::vec(arbitrary_edit(), 0..15),
        edit in arbitrary_edit(),
    ) {
        let ids = SequentialIdGenerator::new("el");
        let doc = apply_all(&history, &ids);

        match edit.apply(&doc, &ids) {
            EditOutcome::Applied(_) => {}
            EditOutcome::NoMatch(presentation) => prop_assert_eq!(presentation, doc),
            EditOutcome::Rejected { presentation, .. } => prop_assert_eq!(presentation, doc),
        }
    }

    #[test]
    fn invariants_hold_after_any_edit_sequence(
        edits in prop::collection::vec(arbitrary_edit(), 0..30)
    ) {
        let ids = SequentialIdGenerator::new("el");
        let doc = apply_all(&edits, &ids);

        prop_assert!(check_invariants(&doc).is_success());
    }

    #[test]
    fn element_ids_stay_unique_with_a_fresh_generator_per_edit(
        targets in prop::collection::vec(arbitrary_slide_id(), 0..20),
        element in arbitrary_element(),
    ) {
        let doc = targets.iter().fold(base_presentation(), |doc, slide_id| {
            doc.add_content_with(slide_id, element.clone(), &SequentialIdGenerator::new("el"))
        });

        prop_assert!(check_invariants(&doc).is_success());
    }

    #[test]
    fn added_slide_ids_are_distinct(count in 0..40usize) {
        let doc = (0..count).fold(Presentation::new("Deck"), |doc, _| doc.add_slide());
        let ids: HashSet<&str> = doc.slide_ids().into_iter().collect();

        prop_assert_eq!(doc.slides.len(), count);
        prop_assert_eq!(ids.len(), count);
    }

    #[test]
    fn added_slide_ids_stay_distinct_after_deletes(
        deletes in prop::collection::vec(1..10usize, 0..5),
        adds in 1..10usize,
    ) {
        let mut doc = (0..10).fold(Presentation::new("Deck"), |doc, _| doc.add_slide());
        for n in deletes {
            doc = doc.delete_slide(&format!("slide{n}"));
        }
        for _ in 0..adds {
            doc = doc.add_slide();
        }

        let ids: HashSet<&str> = doc.slide_ids().into_iter().collect();
        prop_assert_eq!(ids.len(), doc.slides.len());
    }

    #[test]
    fn added_content_ids_are_distinct(
        elements in prop::collection::vec(arbitrary_element(), 0..25)
    ) {
        let doc = elements.iter().fold(base_presentation(), |doc, element| {
            doc.add_content_with("slide1", element.clone(), &UuidGenerator)
        });

        let ids: HashSet<&str> = doc.slides[0].elements().iter().map(|e| e.id()).collect();
        prop_assert_eq!(ids.len(), elements.len());
    }

    #[test]
    fn moving_selected_slide_to_its_own_index_is_identity(
        count in 1..10usize,
        selected in 0..10usize,
    ) {
        let mut doc = (0..count).fold(Presentation::new("Deck"), |doc, _| doc.add_slide());
        let selected = selected % count;
        doc.selection.selected_slide_id = doc.slides[selected].id.clone();

        prop_assert_eq!(doc.change_slide_position(selected).unwrap(), doc);
    }

    #[test]
    fn untargeted_slides_are_untouched(
        history in prop::collection::vec(arbitrary_edit(), 0..15),
        target in arbitrary_slide_id(),
    ) {
        let ids = SequentialIdGenerator::new("el");
        let doc = apply_all(&history, &ids);
        let updated = doc.set_background(&target, Background::solid("#123456"));

        for (before, after) in doc.slides.iter().zip(&updated.slides) {
            if before.id != target {
                prop_assert_eq!(before, after);
            }
        }
    }
}

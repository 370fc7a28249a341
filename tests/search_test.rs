mod common;

use asset_search::catalog::PropType;
use asset_search::search::{Selection, SizeBucket, TypeFilter};
use asset_search::{AssetType, FilterState, ItemId, Searcher};
use assert2::check;
use common::{Indexed, building, mixed, prop};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;

fn ids(indexed: &Indexed, query: &str, state: &FilterState) -> Vec<String> {
    Searcher::new(&indexed.catalog, &indexed.tags)
        .find(query, state)
        .items()
        .map(|item| item.id.as_str().to_string())
        .collect()
}

// --- Boundary scenarios ---

#[test]
fn prefix_match_on_title_tag() {
    let indexed = Indexed::new([prop("hall", PropType::PropsCommon).with_title_tags(["town hall"])]);
    let result = Searcher::new(&indexed.catalog, &indexed.tags).find("town", &FilterState::with_type(TypeFilter::Prop));

    // Title weight 5, prefix multiplier 10, keyword covers 4 of 9 chars.
    let score = result.score_of(&ItemId::from("hall"));
    check!(score.is_some_and(|s| (s - 5.0 * 10.0 * (4.0 / 9.0)).abs() < 1e-4));
}

#[test]
fn exclude_rejects_scoring_item() {
    let indexed = Indexed::new([prop("hall", PropType::PropsCommon).with_title_tags(["town hall"])]);
    check!(ids(&indexed, "!hall", &FilterState::default()).is_empty());
}

#[test]
fn prop_category_selection() {
    let indexed = Indexed::new([
        prop("crate", PropType::PropsIndustrial),
        prop("rock", PropType::Natural),
    ]);
    let state = FilterState {
        props: Selection::only(PropType::Natural),
        ..FilterState::with_type(TypeFilter::Prop)
    };
    check!(ids(&indexed, "", &state) == vec!["rock"]);
}

#[test]
fn size_bucket_on_x_axis() {
    let indexed = Indexed::new([
        building("narrow", AssetType::Growable, 10.0, 0).with_size(4, 2),
        building("medium", AssetType::Growable, 10.0, 0).with_size(6, 2),
        building("wide", AssetType::Growable, 10.0, 0).with_size(10, 2),
    ]);
    let mut state = FilterState::with_type(TypeFilter::Growable);
    state.building_size.x = SizeBucket::From5To8;
    check!(ids(&indexed, "", &state) == vec!["medium"]);
}

#[rstest]
#[case(&["modern"], false)]
#[case(&["vintage building"], true)]
fn custom_tag_only_operator(#[case] tags: &[&str], #[case] accepted: bool) {
    let indexed = Indexed::new([prop("x", PropType::PropsCommon).with_custom_tags(tags.iter().copied())]);
    check!(ids(&indexed, "#vintage", &FilterState::default()).is_empty() != accepted);
}

#[test]
fn vanilla_toggle_off_keeps_custom_content() {
    let indexed = Indexed::new([
        prop("vanilla", PropType::PropsCommon),
        prop("custom", PropType::PropsCommon).custom(123),
    ]);
    let state = FilterState {
        include_vanilla: false,
        ..FilterState::default()
    };
    check!(ids(&indexed, "", &state) == vec!["custom"]);
}

// --- Keyword semantics ---

#[rstest]
#[case("park")]
#[case("road")]
#[case("vintage")]
#[case("samsam")]
fn exclude_is_complement_of_plain(mixed: Indexed, #[case] keyword: &str) {
    let state = FilterState::default();
    let everything = ids(&mixed, "", &state);
    let plain = ids(&mixed, keyword, &state);
    let excluded = ids(&mixed, &format!("!{keyword}"), &state);

    check!(plain.len() + excluded.len() == everything.len());
    check!(plain.iter().all(|id| !excluded.contains(id)));
}

#[test]
fn or_accepts_either_and_sums_scores() {
    let indexed = Indexed::new([
        prop("a", PropType::PropsCommon).with_title_tags(["alpha"]),
        prop("b", PropType::PropsCommon).with_title_tags(["beta"]),
        prop("ab", PropType::PropsCommon).with_title_tags(["alpha", "beta"]),
        prop("c", PropType::PropsCommon).with_title_tags(["gamma"]),
    ]);
    let state = FilterState::with_type(TypeFilter::Prop);
    let searcher = Searcher::new(&indexed.catalog, &indexed.tags);

    let either = searcher.find("+alpha +beta", &state);
    check!(either.len() == 3);
    check!(!either.contains(&ItemId::from("c")));

    let alpha = searcher.find("+alpha", &state);
    let beta = searcher.find("+beta", &state);
    let id = ItemId::from("ab");
    let summed = alpha.score_of(&id).unwrap() + beta.score_of(&id).unwrap();
    check!((either.score_of(&id).unwrap() - summed).abs() < 1e-4);
}

#[test]
fn or_group_with_plain_keyword() {
    let indexed = Indexed::new([
        prop("red bench", PropType::PropsParks).with_title_tags(["red", "bench"]),
        prop("blue bench", PropType::PropsParks).with_title_tags(["blue", "bench"]),
        prop("red lamp", PropType::PropsLights).with_title_tags(["red", "lamp"]),
    ]);
    check!(ids(&indexed, "bench +red", &FilterState::with_type(TypeFilter::Prop)) == vec!["red bench"]);
}

#[test]
fn custom_tag_exclude_operator() {
    let indexed = Indexed::new([
        prop("old", PropType::PropsCommon).with_custom_tags(["vintage"]),
        prop("new", PropType::PropsCommon).with_custom_tags(["modern"]),
        prop("untagged", PropType::PropsCommon).with_title_tags(["vintage"]),
    ]);
    check!(ids(&indexed, "$vintage", &FilterState::default()) == vec!["new", "untagged"]);
}

#[test]
fn workshop_id_operator() {
    let indexed = Indexed::new([
        prop("sub", PropType::PropsCommon).custom(2_045_678),
        prop("local", PropType::PropsCommon).custom(0),
        prop("vanilla", PropType::PropsCommon),
    ]);
    let state = FilterState::default();
    check!(ids(&indexed, "%2045678", &state) == vec!["sub"]);
    check!(ids(&indexed, "%456", &state) == vec!["sub"]);
    check!(ids(&indexed, "%999", &state).is_empty());
}

#[rstest]
fn find_is_idempotent(mixed: Indexed) {
    let searcher = Searcher::new(&mixed.catalog, &mixed.tags);
    let state = FilterState::default();
    let first = searcher.find("park +vintage +oak", &state);
    let second = searcher.find("park +vintage +oak", &state);
    check!(first == second);
}

#[rstest]
fn type_filter_disables_type_name_scoring(mixed: Indexed) {
    check!(ids(&mixed, "tree", &FilterState::default()) == vec!["oak"]);
    check!(ids(&mixed, "tree", &FilterState::with_type(TypeFilter::Tree)).is_empty());
}

#[rstest]
fn rare_tags_outrank_common_ones(mixed: Indexed) {
    // "park" is a title tag on two items, "rock" on one; both are exact 4-char matches.
    let searcher = Searcher::new(&mixed.catalog, &mixed.tags);
    let state = FilterState::with_type(TypeFilter::Prop);
    let park = searcher.find("park", &state).score_of(&ItemId::from("bench"));
    let rock = searcher.find("rock", &state).score_of(&ItemId::from("rock"));
    check!(rock.unwrap() > park.unwrap());
}

#[rstest]
fn pick_random_is_uniform_over_matches(mixed: Indexed) {
    let result = Searcher::new(&mixed.catalog, &mixed.tags).find("road", &FilterState::default());
    check!(result.len() == 2);

    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..64 {
        let picked = result.pick_random(&mut rng).unwrap();
        check!(result.contains(&picked.item.id));
        seen.insert(picked.item.id.clone());
    }
    check!(seen.len() == 2);
}

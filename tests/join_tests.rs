//! Join and fetch-join semantics (feature `unstable-joins`).

#![cfg(feature = "unstable-joins")]

mod common;

use common::{Database, Persona, Post};
use sqlspec::{JoinType, SelectQuery, Specification};

fn persona_ids(spec: Specification<Persona>) -> Vec<i64> {
    let database = Database::seeded();
    database.select_ids(&SelectQuery::new().filter(spec))
}

/// A specification that joins `POSTS` and applies no further filtering.
fn joined_unfiltered(join_type: JoinType) -> Specification<Persona> {
    Specification::new(move |root, cb| {
        Persona::POSTS.join(root, join_type);
        cb.and_all(Vec::new())
    })
}

#[test]
fn default_join_type_is_inner() {
    let defaulted = persona_ids(joined_unfiltered(JoinType::default()));
    let explicit = persona_ids(joined_unfiltered(JoinType::Inner));
    assert_eq!(defaulted, explicit);
    // Persona 3 has no posts and drops out under an inner join.
    assert_eq!(defaulted, vec![1, 2]);
}

#[test]
fn left_join_keeps_parents_without_children() {
    assert_eq!(persona_ids(joined_unfiltered(JoinType::Left)), vec![1, 2, 3]);
}

#[test]
fn right_join_keeps_children_without_parents() {
    let database = Database::seeded();

    let inner = SelectQuery::new().filter(joined_unfiltered(JoinType::Inner));
    let right = SelectQuery::new().filter(joined_unfiltered(JoinType::Right));

    // Three matched persona/post pairs either way; the right join adds the
    // orphan post as a row with no persona id.
    assert_eq!(database.select_rows(&inner).len(), 3);
    assert_eq!(database.select_rows(&right).len(), 4);
    assert_eq!(database.select_ids::<Persona>(&right), vec![1, 2]);
}

#[test]
fn predicates_apply_against_the_joined_path() {
    let spec = Specification::new(|root, cb| {
        let posts = Persona::POSTS.join(root, JoinType::Inner);
        posts.equal(cb, &Post::TITLE, "Third".to_string())
    });
    assert_eq!(persona_ids(spec), vec![2]);
}

#[test]
fn to_one_joins_filter_children_by_parent() {
    let database = Database::seeded();
    let spec = Specification::new(|root, cb| {
        let persona = Post::PERSONA.join(root, JoinType::Inner);
        persona.greater_than_or_equal_to(cb, &Persona::AGE, 30)
    });
    let query = SelectQuery::new().filter(spec);
    assert_eq!(database.select_ids::<Post>(&query), vec![3]);
}

#[test]
fn fetch_join_with_predicates_filters_and_eager_loads() {
    let spec = Persona::POSTS.fetch_join_with_predicates(
        JoinType::Inner,
        vec![Post::TITLE.equal("First".to_string())],
    );
    let query = SelectQuery::new().filter(spec);

    let (sql, params) = query.to_sql_with_params();
    assert_eq!(
        sql,
        "SELECT personas.*, posts.* FROM personas \
         INNER JOIN posts ON personas.id = posts.persona_id \
         WHERE posts.title = $1"
    );
    assert_eq!(params.len(), 1);

    let database = Database::seeded();
    assert_eq!(database.select_ids::<Persona>(&query), vec![1]);
}

#[test]
fn fetch_join_renders_a_single_join_clause() {
    // The DSL records a fetch and then a join of the same association; the
    // rendered query must not duplicate the join.
    let spec = Persona::POSTS.fetch_join_with_predicates(JoinType::Left, Vec::new());
    let query = SelectQuery::new().filter(spec);
    assert_eq!(query.effective_joins().len(), 1);
    assert_eq!(
        query.to_sql(),
        "SELECT personas.*, posts.* FROM personas \
         LEFT JOIN posts ON personas.id = posts.persona_id \
         WHERE TRUE"
    );
}

#[test]
fn single_predicate_form_matches_the_plural_form() {
    let database = Database::seeded();

    let singular = SelectQuery::new().filter(
        Persona::POSTS
            .fetch_join_with_predicate(JoinType::Inner, Post::TITLE.equal("First".to_string())),
    );
    let plural = SelectQuery::new().filter(Persona::POSTS.fetch_join_with_predicates(
        JoinType::Inner,
        vec![Post::TITLE.equal("First".to_string())],
    ));

    assert_eq!(
        database.select_ids::<Persona>(&singular),
        database.select_ids::<Persona>(&plural)
    );
    assert_eq!(singular.to_sql(), plural.to_sql());
}

#[test]
fn multiple_joined_predicates_are_anded() {
    let spec = Persona::POSTS.fetch_join_with_predicates(
        JoinType::Inner,
        vec![
            Post::TITLE.like("%i%"),
            Post::TAGS.is_member("rust".to_string()),
        ],
    );
    let database = Database::seeded();
    let query = SelectQuery::new().filter(spec);
    assert_eq!(database.select_ids::<Persona>(&query), vec![1]);
}

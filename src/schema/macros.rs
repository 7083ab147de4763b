//! The `entity!` declaration macro.

/// Declares the schema of an entity type: its table, typed field
/// descriptors and (optionally) associations.
///
/// Implements [`Entity`](crate::schema::Entity) for the type and emits one
/// `pub const` [`Field`](crate::schema::Field) per column plus one
/// [`Association`](crate::schema::Association) per declared association,
/// so descriptor and column list cannot diverge.
///
/// ```
/// struct Persona;
/// struct Post;
///
/// sqlspec::entity! {
///     Persona => "personas" {
///         ID: i64 => "id",
///         NAME: String => "name",
///     }
///     associations {
///         POSTS("posts"): many Post => ("id", "persona_id"),
///     }
/// }
///
/// sqlspec::entity! {
///     Post => "posts" {
///         ID: i64 => "id",
///         PERSONA_ID: i64 => "persona_id",
///     }
/// }
///
/// assert_eq!(Persona::NAME.column(), "name");
/// assert_eq!(Persona::POSTS.local_column(), "id");
/// ```
#[macro_export]
macro_rules! entity {
    (
        $entity:ty => $table:literal {
            $( $field:ident : $ftype:ty => $column:literal ),+ $(,)?
        }
        $(
            associations {
                $( $assoc:ident ( $aname:literal ) : $kind:ident $target:ty
                    => ( $local:literal, $foreign:literal ) ),+ $(,)?
            }
        )?
    ) => {
        impl $crate::schema::Entity for $entity {
            const TABLE: &'static str = $table;

            fn columns() -> &'static [&'static str] {
                &[ $( $column ),+ ]
            }
        }

        impl $entity {
            $(
                pub const $field: $crate::schema::Field<$entity, $ftype> =
                    $crate::schema::Field::new($column);
            )+
            $($(
                pub const $assoc: $crate::schema::Association<$entity, $target> =
                    $crate::schema::Association::new(
                        $aname,
                        $crate::entity!(@kind $kind),
                        $local,
                        $foreign,
                    );
            )+)?
        }
    };
    (@kind one) => {
        $crate::schema::AssociationKind::ToOne
    };
    (@kind many) => {
        $crate::schema::AssociationKind::ToMany
    };
}

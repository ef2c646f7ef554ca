//! # Declaration Macros
//!
//! The declarative surface: `declare_enums!` turns braced member lists
//! into lazily-constructed enumeration types with named accessors, so
//! `Colour::red()` reads like a plain constant while resolving to the
//! shared singleton member.

/// Declare one or more enumerations as types with named member accessors.
///
/// Each block expands to a unit struct carrying:
/// - `fn ty() -> &'static EnumType`, the shared type, constructed once on
///   first access
/// - one accessor per member returning its singleton [`Member`](crate::Member)
///
/// Members may carry `= value` assignments (integer or `&str`); the usual
/// ordering rules apply. A member name repeated within one block fails to
/// compile (duplicate function definitions); reserved names are rejected
/// by the runtime validator when the type is first touched.
///
/// ```
/// use sigil_core::declare_enums;
///
/// declare_enums! {
///     pub enum Colour { red, blue, green, yellow }
///     pub enum CarBrand { Ford = 1, Toyota = 3, Mitsubishi = 2 }
/// }
///
/// assert_eq!(Colour::red(), Colour::ty().member("red")?);
/// assert_eq!(Colour::red().to_string(), "Colour.red");
///
/// let order: Vec<_> = CarBrand::ty().iter().map(|m| m.name().to_string()).collect();
/// assert_eq!(order, ["Ford", "Mitsubishi", "Toyota"]);
/// # Ok::<(), sigil_core::SigilError>(())
/// ```
#[macro_export]
macro_rules! declare_enums {
    ($(
        $vis:vis enum $ty:ident {
            $($name:ident $(= $value:expr)?),+
            $(,)?
        }
    )+) => {$(
        $vis struct $ty;

        impl $ty {
            /// The shared enumeration type, constructed on first access.
            $vis fn ty() -> &'static $crate::EnumType {
                static TYPE: ::std::sync::LazyLock<$crate::EnumType> =
                    ::std::sync::LazyLock::new(|| {
                        let decl = $crate::Declaration::new(stringify!($ty))
                            $(.entry(stringify!($name), $crate::__opt_value!($($value)?)))+;
                        $crate::EnumType::new(decl).expect("invalid enumeration declaration")
                    });
                &TYPE
            }

            $(
                #[doc = concat!("The `", stringify!($name), "` singleton member.")]
                #[allow(non_snake_case)]
                $vis fn $name() -> $crate::Member {
                    Self::ty()
                        .member(stringify!($name))
                        .expect("declared member")
                }
            )+
        }
    )+};
}

/// Internal helper: wraps an optional `= value` expression.
#[doc(hidden)]
#[macro_export]
macro_rules! __opt_value {
    () => {
        ::core::option::Option::None
    };
    ($value:expr) => {
        ::core::option::Option::Some($crate::Value::from($value))
    };
}

// =============================================================================
// TESTS
// =============================================================================

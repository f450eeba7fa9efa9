/// Generates a type implementing [`HostFunctions`](crate::HostFunctions).
///
/// ### Example:
///
/// The following code makes the two host functions `Test` and `answer` available to the `call_back` instruction.
///
/// ```
/// use cvm::{host_functions, HostFunctions};
///
/// host_functions! {
///     /// Demo functions.
///     pub MyFns {
///         /// Returns 2.
///         fn Test() {
///             2
///         }
///         /// Returns the answer.
///         fn answer() {
///             40 + 2
///         }
///     }
/// }
///
/// assert_eq!(MyFns.invoke("Test"), Some(2));
/// assert_eq!(MyFns.invoke("answer"), Some(42));
/// assert_eq!(MyFns.invoke("missing"), None);
/// assert_eq!(MyFns::names(), &[ "Test", "answer" ]);
/// ```
#[macro_export]
macro_rules! host_functions {
    (
        $( #[ $type_attr:meta ] )*
        $vis:vis $type_name:ident {
            $(
                $( #[ $attr:meta ] )*
                fn $name:ident ( ) $code:block
            )*
        }
    ) => {
        $( #[ $type_attr ] )*
        #[derive(Copy, Clone, Debug, Default)]
        $vis struct $type_name;

        #[allow(non_snake_case)]
        impl $type_name {
            $(
                $( #[ $attr ] )*
                pub fn $name() -> $crate::Integer $code
            )*
            /// Names of the functions provided by this table.
            pub fn names() -> &'static [ &'static str ] {
                &[ $( stringify!($name) ),* ]
            }
        }

        impl $crate::HostFunctions for $type_name {
            fn invoke(self: &Self, name: &str) -> Option<$crate::Integer> {
                match name {
                    $( stringify!($name) => Some(Self::$name()), )*
                    _ => None,
                }
            }
        }
    };
}

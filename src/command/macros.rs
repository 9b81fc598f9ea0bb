/// Declares a command type together with its options.
///
/// Each option gets two accessors on the generated type:
/// - `name(&self)` reads the option through the instance, resolving against
///   the bound invocation or falling back to the option's unbound value.
/// - `name_option()` returns the shared declaration for type-level use, such
///   as building registration payloads.
///
/// ```ignore
/// define_command! {
///     pub struct Echo(ChatInput, "echo", "Repeat a message back") {
///         text: String = string("text", "Text to repeat"),
///         times: i64 = integer("times", "Repeat count").with_default(1),
///     }
/// }
/// ```
#[macro_export]
macro_rules! define_command {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($kind:ident, $command_name:literal, $description:literal) {
            $(
                $(#[$option_meta:meta])*
                $option:ident: $ty:ty = $init:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            base: $crate::command::CommandBase,
        }

        impl $crate::command::InvocationHost for $name {
            fn current_context(&self) -> ::std::option::Option<&$crate::interaction::Context> {
                $crate::command::InvocationHost::current_context(&self.base)
            }

            fn client(&self) -> &dyn $crate::command::ValueResolver {
                $crate::command::InvocationHost::client(&self.base)
            }
        }

        $crate::__private::paste! {
            impl $name {
                $(
                    $(#[$option_meta])*
                    pub fn $option(&self) -> ::std::result::Result<$ty, $crate::core::ResolveError> {
                        let host: &dyn $crate::command::InvocationHost = self;
                        $crate::options::OptionAccess::get(
                            Self::[<$option _option>](),
                            ::std::option::Option::Some(host),
                        )
                    }

                    pub fn [<$option _option>]() -> &'static dyn $crate::options::OptionAccess<$ty> {
                        static OPTION: $crate::__private::Lazy<
                            ::std::boxed::Box<dyn $crate::options::OptionAccess<$ty>>,
                        > = $crate::__private::Lazy::new(
                            || -> ::std::boxed::Box<dyn $crate::options::OptionAccess<$ty>> {
                                ::std::boxed::Box::new($init)
                            },
                        );
                        OPTION.as_ref()
                    }
                )*
            }

            impl $crate::command::CommandDefinition for $name {
                const NAME: &'static str = $command_name;
                const DESCRIPTION: &'static str = $description;
                const TYPE: $crate::schema::CommandType = $crate::schema::CommandType::$kind;

                fn from_base(base: $crate::command::CommandBase) -> Self {
                    Self { base }
                }

                fn base(&self) -> &$crate::command::CommandBase {
                    &self.base
                }

                fn base_mut(&mut self) -> &mut $crate::command::CommandBase {
                    &mut self.base
                }

                fn options() -> ::std::vec::Vec<&'static dyn $crate::options::OptionSchema> {
                    ::std::vec![
                        $($crate::options::OptionAccess::schema(Self::[<$option _option>]())),*
                    ]
                }

                fn target_types() -> ::std::vec::Vec<$crate::schema::CommandType> {
                    let targets: ::std::vec::Vec<::std::option::Option<$crate::schema::CommandType>> =
                        ::std::vec![
                            $($crate::options::OptionAccess::target_type(Self::[<$option _option>]())),*
                        ];
                    targets.into_iter().flatten().collect()
                }
            }
        }
    };
}

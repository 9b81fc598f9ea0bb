use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use slash_options::interaction::{Context, Interaction};
use slash_options::options::{boolean, integer, number, string, OptionSchema};
use slash_options::schema::CommandType;
use slash_options::{
    define_command, CommandBase, CommandDefinition, OptionAccess, OptionValue, ResolveError,
    ValueResolver,
};

define_command! {
    struct Profile(ChatInput, "profile", "Edit a profile") {
        name: String = string("name", "Display name"),
        age: i64 = integer("age", "Age in years").min_value(0).max_value(120),
        public: bool = boolean("public", "Show publicly").with_default(true),
        height: f64 = number("height", "Height in metres"),
        bio: Option<String> = string("bio", "Short biography").optional(),
    }
}

/// Answers every option with a fixed value and counts the calls it gets.
struct CountingResolver {
    answer: OptionValue,
    calls: AtomicUsize,
}

impl CountingResolver {
    fn new(answer: impl Into<OptionValue>) -> Arc<Self> {
        Arc::new(Self {
            answer: answer.into(),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ValueResolver for CountingResolver {
    fn resolve_option(
        &self,
        _context: &Context,
        _option: &dyn OptionSchema,
    ) -> Result<OptionValue, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer.clone())
    }
}

fn bound(resolver: Arc<CountingResolver>) -> Profile {
    let mut profile = Profile::new(resolver);
    profile
        .base_mut()
        .bind(Arc::new(Context::new(Interaction::new(
            7,
            CommandType::ChatInput,
            "profile",
        ))));
    profile
}

#[test]
fn test_type_level_reads_are_zero_values() {
    assert_eq!(Profile::name_option().get(None), Ok(String::new()));
    assert_eq!(Profile::age_option().get(None), Ok(0));
    assert_eq!(Profile::public_option().get(None), Ok(false));
    assert_eq!(Profile::height_option().get(None), Ok(0.0));
    assert_eq!(Profile::bio_option().get(None), Ok(None));
}

#[test]
fn test_unbound_instance_never_calls_resolver() {
    let resolver = CountingResolver::new("ignored");
    let profile = Profile::new(resolver.clone());

    assert_eq!(profile.name(), Ok(String::new()));
    assert_eq!(profile.age(), Ok(0));
    assert_eq!(resolver.calls(), 0);
}

#[test]
fn test_bound_read_resolves_once_per_access() {
    let resolver = CountingResolver::new("ferris");
    let profile = bound(resolver.clone());

    assert_eq!(profile.name(), Ok("ferris".to_string()));
    assert_eq!(resolver.calls(), 1);

    assert_eq!(profile.name(), Ok("ferris".to_string()));
    assert_eq!(resolver.calls(), 2);
}

#[test]
fn test_unbind_restores_fallback() {
    let resolver = CountingResolver::new(33);
    let mut profile = bound(resolver.clone());
    assert_eq!(profile.age(), Ok(33));

    let previous = profile.base_mut().unbind();
    assert_eq!(previous.map(|context| context.interaction.id.get()), Some(7));
    assert!(!profile.base().is_bound());
    assert_eq!(profile.age(), Ok(0));
    assert_eq!(resolver.calls(), 1);
}

#[test]
fn test_instances_share_declarations_but_not_bindings() {
    let ferris = bound(CountingResolver::new("ferris"));
    let corro = bound(CountingResolver::new("corro"));
    let idle = Profile::from_base(CommandBase::new(CountingResolver::new("idle")));

    assert_eq!(ferris.name(), Ok("ferris".to_string()));
    assert_eq!(corro.name(), Ok("corro".to_string()));
    assert_eq!(idle.name(), Ok(String::new()));
}

#[test]
fn test_mistyped_resolution_is_reported() {
    let profile = bound(CountingResolver::new("not a number"));

    match profile.age() {
        Err(ResolveError::UnexpectedValue { option, expected, .. }) => {
            assert_eq!(option, "age");
            assert_eq!(expected, "integer");
        }
        other => panic!("Expected an UnexpectedValue error, got {other:?}"),
    }
}

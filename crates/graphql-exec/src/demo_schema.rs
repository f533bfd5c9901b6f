//! A small schema of wizards, their wands and their familiars, used by the
//! `run` and `check` commands.

use libgraphql_exec::Context;
use libgraphql_exec::error::FieldError;
use libgraphql_exec::schema::Deferred;
use libgraphql_exec::schema::GraphQLEnum;
use libgraphql_exec::schema::ID;
use libgraphql_exec::schema::InputObject;
use libgraphql_exec::schema::InputParser;
use libgraphql_exec::schema::InputType;
use libgraphql_exec::schema::MutationRoot;
use libgraphql_exec::schema::QueryRoot;
use libgraphql_exec::schema::Schema;
use libgraphql_exec::schema::SchemaBuildError;
use libgraphql_exec::schema::SubscriptionEvent;
use libgraphql_exec::schema::TypeRegistry;
use libgraphql_exec::types::EnumRepr;
use libgraphql_exec::types::TypeRef;

type ParserResult<T> = Result<(InputParser<T>, Option<TypeRef>), SchemaBuildError>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum House {
    #[default]
    Gryffindor,
    Hufflepuff,
    Ravenclaw,
    Slytherin,
}
impl GraphQLEnum for House {
    fn repr(&self) -> EnumRepr {
        EnumRepr::String(format!("{self:?}").to_lowercase())
    }
}
libgraphql_exec::graphql_enum!(House);

pub(crate) struct Wand {
    core: &'static str,
    length: f64,
    wood: &'static str,
}
libgraphql_exec::graphql_object!(Wand);

pub(crate) struct Owl {
    name: &'static str,
}
libgraphql_exec::graphql_object!(Owl);

pub(crate) struct Toad {
    name: &'static str,
}
libgraphql_exec::graphql_object!(Toad);

pub(crate) enum Familiar {
    Owl(Owl),
    Toad(Toad),
}
libgraphql_exec::graphql_one_of!(Familiar { Owl, Toad });

pub(crate) struct Wizard {
    friends: &'static [&'static str],
    house: House,
    id: &'static str,
    name: &'static str,
}

static WIZARDS: &[Wizard] = &[
    Wizard {
        friends: &["ron", "hermione"],
        house: House::Gryffindor,
        id: "harry",
        name: "Harry Potter",
    },
    Wizard {
        friends: &["harry", "hermione"],
        house: House::Gryffindor,
        id: "ron",
        name: "Ron Weasley",
    },
    Wizard {
        friends: &["harry", "ron"],
        house: House::Gryffindor,
        id: "hermione",
        name: "Hermione Granger",
    },
    Wizard {
        friends: &[],
        house: House::Slytherin,
        id: "draco",
        name: "Draco Malfoy",
    },
    Wizard {
        friends: &["harry"],
        house: House::Hufflepuff,
        id: "neville",
        name: "Neville Longbottom",
    },
];

fn find_wizard(id: &str) -> Option<&'static Wizard> {
    WIZARDS.iter().find(|wizard| wizard.id == id)
}

fn wand_of(wizard: &Wizard) -> Option<Wand> {
    match wizard.id {
        "harry" => Some(Wand { core: "phoenix feather", length: 11.0, wood: "holly" }),
        "hermione" => Some(Wand { core: "dragon heartstring", length: 10.75, wood: "vine" }),
        "draco" => Some(Wand { core: "unicorn hair", length: 10.0, wood: "hawthorn" }),
        _ => None,
    }
}

fn familiar_of(wizard: &Wizard) -> Option<Familiar> {
    match wizard.id {
        "harry" => Some(Familiar::Owl(Owl { name: "Hedwig" })),
        "neville" => Some(Familiar::Toad(Toad { name: "Trevor" })),
        _ => None,
    }
}

/// Wizards are handed out by reference into the static table.
#[derive(Clone, Copy)]
pub(crate) struct WizardRef(&'static Wizard);
impl std::ops::Deref for WizardRef {
    type Target = Wizard;

    fn deref(&self) -> &Wizard {
        self.0
    }
}
libgraphql_exec::graphql_object!(WizardRef);

#[derive(Default)]
struct WizardArgs {
    id: ID,
}
impl InputType for WizardArgs {
    fn input_parser(registry: &mut TypeRegistry) -> ParserResult<Self> {
        InputObject::<WizardArgs>::new("WizardArgs")
            .field("id", |args: &mut WizardArgs, id: ID| args.id = id)
            .build(registry)
    }
}

#[derive(Default)]
struct WizardsArgs {
    house: Option<House>,
}
impl InputType for WizardsArgs {
    fn input_parser(registry: &mut TypeRegistry) -> ParserResult<Self> {
        InputObject::<WizardsArgs>::new("WizardsArgs")
            .field("house", |args: &mut WizardsArgs, house: Option<House>| args.house = house)
            .build(registry)
    }
}

#[derive(Default)]
struct CastArgs {
    spell: String,
    target: Option<ID>,
}
impl InputType for CastArgs {
    fn input_parser(registry: &mut TypeRegistry) -> ParserResult<Self> {
        InputObject::<CastArgs>::new("CastArgs")
            .field("spell", |args: &mut CastArgs, spell: String| args.spell = spell)
            .field("target", |args: &mut CastArgs, target: Option<ID>| args.target = target)
            .build(registry)
    }
}

/// Request data naming the wizard a mutation is performed by.
#[derive(Clone, Debug)]
pub(crate) struct Caster(pub(crate) String);

pub(crate) fn build() -> Result<Schema, SchemaBuildError> {
    let mut builder = Schema::builder();

    builder.enum_type("House", [
        ("GRYFFINDOR", House::Gryffindor),
        ("HUFFLEPUFF", House::Hufflepuff),
        ("RAVENCLAW", House::Ravenclaw),
        ("SLYTHERIN", House::Slytherin),
    ]);

    builder.object::<Wand>("Wand")
        .field_func("core", |wand: &Wand| wand.core)
        .field_func("length", |wand: &Wand| wand.length)
        .field_func("wood", |wand: &Wand| wand.wood);

    builder.object::<Owl>("Owl")
        .field_func("name", |owl: &Owl| owl.name)
        .field_func("deliversMail", |_owl: &Owl| true);
    builder.object::<Toad>("Toad")
        .field_func("name", |toad: &Toad| toad.name);
    builder.union::<Familiar>("Familiar").member::<Owl>().member::<Toad>();

    builder.object::<WizardRef>("Wizard")
        .description("A student at the school")
        .key("id")
        .field_func("id", |wizard: &WizardRef| ID::from(wizard.id))
        .field_func("name", |wizard: &WizardRef| wizard.name)
        .field_func("house", |wizard: &WizardRef| wizard.house)
        .field_func("wand", |wizard: &WizardRef| wand_of(wizard))
        .field_func("familiar", |wizard: &WizardRef| familiar_of(wizard))
        // Friends are looked up after the rest of the wizard is resolved.
        .field_func("friends", |wizard: &WizardRef| {
            let friends = wizard.friends;
            Deferred::new(move || {
                friends.iter()
                    .map(|id| find_wizard(id).map(WizardRef).ok_or_else(|| {
                        FieldError::new(format!("no wizard with id {id}"))
                    }))
                    .collect::<Result<Vec<_>, _>>()
            })
        });

    builder.query()
        .field_func_with_args("wizard", |_root: &QueryRoot, args: &WizardArgs| {
            find_wizard(args.id.as_str()).map(WizardRef)
        })
        .field_func_with_args("wizards", |_root: &QueryRoot, args: &WizardsArgs| {
            WIZARDS.iter()
                .filter(|wizard| args.house.is_none_or(|house| wizard.house == house))
                .map(WizardRef)
                .collect::<Vec<_>>()
        });

    builder.mutation()
        .field_func_with_context("castSpell", |ctx: &Context, _root: &MutationRoot, args: &CastArgs| {
            let caster = ctx.data::<Caster>()
                .map(|caster| caster.0.as_str())
                .unwrap_or("someone");
            if args.spell.trim().is_empty() {
                return Err(FieldError::new("a spell needs an incantation"));
            }
            Ok(match &args.target {
                Some(target) => format!("{caster} cast {} at {target}", args.spell),
                None => format!("{caster} cast {}", args.spell),
            })
        });

    builder.subscription()
        .field_func("owlPost", |event: &SubscriptionEvent| -> Result<String, FieldError> {
            let letter = String::from_utf8_lossy(event.payload());
            if letter.trim().is_empty() {
                // Empty deliveries produce no update.
                return Err(FieldError::no_update());
            }
            Ok(letter.into_owned())
        })
        .field_func("bytes", |event: &SubscriptionEvent| {
            u32::try_from(event.payload().len()).unwrap_or(u32::MAX)
        });

    builder.build()
}

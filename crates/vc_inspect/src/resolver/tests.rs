use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use vc_reflect::info::{Agent, CustomAttributes, ElementType, EntryTypes, Field};
use vc_reflect::info::{HideInInspector, PrimitiveKind, RefTarget, Smart};
use vc_reflect::info::{StructBuilder, Type, TypeInfo};
use vc_reflect::registry::{TypeRegistry, TypeSource};
use vc_reflect::value::{Handle, Object, Value};
use vc_stream::{Payload, StreamError, TypeTag, WireFormat};

use crate::fixtures::{ScriptedSurface, team};
use crate::{AttachError, EditorSettings, InspectorHook, ReleaseSignal, SceneNode, TypeEditor};

fn prim(kind: PrimitiveKind) -> Type {
    Type::primitive(kind)
}

fn marked<T: core::any::Any + Send + Sync>(marker: T) -> CustomAttributes {
    CustomAttributes::new().with_attribute(marker)
}

fn field(ty: &Type, name: &str) -> Field {
    ty.as_struct().unwrap().field(name).unwrap().clone()
}

struct Game {
    registry: TypeRegistry,
    node: Type,
    weapon: Type,
    player: Type,
}

fn game() -> Game {
    let mut registry = TypeRegistry::new();
    let object = registry.object_type().unwrap();
    let node = TypeInfo::handle("game::Node", Some(&object)).into_type();
    let weapon = StructBuilder::new("game::Weapon")
        .field("damage", &prim(PrimitiveKind::I32))
        .serializable()
        .build();
    let player = StructBuilder::new("game::Player")
        .field("hp", &prim(PrimitiveKind::I32))
        .field("name", &prim(PrimitiveKind::String))
        .field("team", &team())
        .field("squad", &TypeInfo::list(&team()).into_type())
        .field_with("secret", &prim(PrimitiveKind::I32), marked(HideInInspector))
        .field_with("weapon", &Type::type_ref(), marked(RefTarget::new("game::Weapon")))
        .field("target", &node)
        .private_field("stash", &prim(PrimitiveKind::I32))
        .serializable()
        .build();
    registry.register(weapon.clone());
    registry.register(player.clone());
    Game {
        registry,
        node,
        weapon,
        player,
    }
}

fn tag_of(editor: &mut TypeEditor, ty: &Type) -> TypeTag {
    editor.resolve(ty, None).tag()
}

// -----------------------------------------------------------------------------
// Determinism and caching

#[test]
fn same_key_same_handler() {
    let game = game();
    let mut editor = TypeEditor::new(game.registry);

    let a = editor.resolve(&game.player, None);
    let b = editor.resolve(&game.player, None);
    assert!(Arc::ptr_eq(&a, &b));

    let squad = field(&game.player, "squad");
    let a = editor.resolve(squad.ty(), Some(&squad));
    let b = editor.resolve(squad.ty(), Some(&squad));
    assert!(Arc::ptr_eq(&a, &b));

    // Built-ins come from the fixed table.
    let int = prim(PrimitiveKind::I32);
    assert!(Arc::ptr_eq(&editor.resolve(&int, None), &editor.resolve(&int, None)));
    let hp = field(&game.player, "hp");
    assert!(Arc::ptr_eq(&editor.resolve(hp.ty(), Some(&hp)), &editor.resolve(&int, None)));
}

#[test]
fn cache_keys() {
    let game = game();
    let mut editor = TypeEditor::new(game.registry);
    editor.resolve(&game.player, None);

    // Player, Team as a list element and Weapon as a bound reference.
    assert_eq!(editor.cached_type_count(), 3);
    // Every serialized field of Player and Weapon, built-ins included.
    assert_eq!(editor.cached_field_count(), 8);
}

#[test]
fn field_handlers_follow_declared_order() {
    let game = game();
    let mut editor = TypeEditor::new(game.registry);
    let handlers = editor.field_handlers(&game.player);

    let names: Vec<&str> = handlers.iter().map(|(f, _)| f.name()).collect();
    assert_eq!(names, ["hp", "name", "team", "squad", "secret", "weapon", "target"]);
    let tags: Vec<TypeTag> = handlers.iter().map(|(_, h)| h.tag()).collect();
    assert_eq!(
        tags,
        [
            TypeTag::I32,
            TypeTag::String,
            TypeTag::Enum,
            TypeTag::List,
            TypeTag::Inert,
            TypeTag::TypeRef,
            TypeTag::Handle,
        ]
    );
}

#[test]
#[should_panic(expected = "resolved as")]
fn field_identity_clash_fails_fast() {
    let first = StructBuilder::new("m::Holder").field("x", &team()).build();
    let second = StructBuilder::new("m::Holder")
        .field("x", &TypeInfo::list(&team()).into_type())
        .build();
    let mut editor = TypeEditor::new(TypeRegistry::new());

    let x = field(&first, "x");
    editor.resolve(x.ty(), Some(&x));
    let x = field(&second, "x");
    editor.resolve(x.ty(), Some(&x));
}

#[test]
#[should_panic(expected = "resolved as")]
fn built_in_field_identity_clash_fails_fast() {
    let first = StructBuilder::new("m::Counter")
        .field("n", &prim(PrimitiveKind::I32))
        .build();
    let second = StructBuilder::new("m::Counter").field("n", &team()).build();
    let mut editor = TypeEditor::new(TypeRegistry::new());

    let n = field(&first, "n");
    assert_eq!(editor.resolve(n.ty(), Some(&n)).tag(), TypeTag::I32);
    assert_eq!(editor.cached_field_count(), 1);
    let n = field(&second, "n");
    editor.resolve(n.ty(), Some(&n));
}

// -----------------------------------------------------------------------------
// Release

#[test]
fn release_drops_cached_handlers() {
    let game = game();
    let mut editor = TypeEditor::new(game.registry);

    let before = editor.resolve(&game.player, None);
    editor.release();
    assert_eq!(editor.generation(), 1);
    assert_eq!(editor.cached_type_count(), 0);
    assert_eq!(editor.cached_field_count(), 0);

    let after = editor.resolve(&game.player, None);
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(after.tag(), TypeTag::Object);
}

#[test]
fn release_signal_is_polled() {
    let game = game();
    let signal = ReleaseSignal::new();
    let mut editor = TypeEditor::new(game.registry);
    editor.attach(&signal).unwrap();
    assert!(signal.is_attached());
    assert_eq!(editor.attach(&signal), Err(AttachError::EditorAttached));

    let before = editor.resolve(&game.weapon, None);
    assert!(Arc::ptr_eq(&before, &editor.resolve(&game.weapon, None)));

    // Several requests between two operations release once.
    signal.request_release();
    signal.request_release();
    let after = editor.resolve(&game.weapon, None);
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(editor.generation(), 1);
    assert_eq!(signal.epoch(), 2);

    editor.poll_release();
    assert_eq!(editor.generation(), 1);
}

#[test]
fn one_editor_per_signal() {
    let signal = ReleaseSignal::new();
    let mut first = TypeEditor::new(TypeRegistry::new());
    let mut second = TypeEditor::new(TypeRegistry::new());
    assert!(first.attach(&signal).is_ok());
    assert_eq!(second.attach(&signal), Err(AttachError::AlreadyAttached));
}

#[test]
fn dropped_editor_frees_the_signal() {
    let signal = ReleaseSignal::new();
    let mut first = TypeEditor::new(TypeRegistry::new());
    first.attach(&signal).unwrap();
    drop(first);
    assert!(!signal.is_attached());

    let mut second = TypeEditor::new(TypeRegistry::new());
    assert!(second.attach(&signal).is_ok());
    signal.request_release();
    second.poll_release();
    assert_eq!(second.generation(), 1);
}

// -----------------------------------------------------------------------------
// Priority

#[test]
fn object_family_beats_enum() {
    let registry = TypeRegistry::new();
    let object = registry.object_type().unwrap();
    let flags = TypeInfo::enumeration("game::Flags", &[("A", 0)])
        .with_base(&object)
        .into_type();
    let mut editor = TypeEditor::new(registry);
    assert_eq!(tag_of(&mut editor, &flags), TypeTag::Handle);
}

#[test]
fn enum_beats_smart() {
    let team = TypeInfo::enumeration("game::Team", &[("Red", 0)])
        .with_attribute(Smart)
        .into_type();
    let mut editor = TypeEditor::new(TypeRegistry::new());
    assert_eq!(tag_of(&mut editor, &team), TypeTag::Enum);
}

#[test]
fn type_ref_beats_smart() {
    let smart_ref = TypeInfo::type_ref().with_attribute(Smart).into_type();
    let mut editor = TypeEditor::new(TypeRegistry::new());
    assert_eq!(tag_of(&mut editor, &smart_ref), TypeTag::Inert);
}

#[test]
fn smart_beats_agent() {
    let both = StructBuilder::new("game::Both")
        .with_attribute(Smart)
        .with_attribute(Agent)
        .serializable()
        .build();
    let agent = TypeInfo::opaque("game::Brain").with_attribute(Agent).into_type();
    let mut editor = TypeEditor::new(TypeRegistry::new());
    assert_eq!(tag_of(&mut editor, &both), TypeTag::Smart);
    assert_eq!(tag_of(&mut editor, &agent), TypeTag::Agent);
}

#[test]
fn agent_beats_hot_list() {
    let item = StructBuilder::new("mod::Item").serializable().hosted().build();
    let mut hosted = TypeRegistry::hosted();
    hosted.register(item.clone());
    let items = TypeInfo::array(&item).with_attribute(Agent).into_type();

    let settings = EditorSettings::default().with_hosted(hosted);
    let mut editor = TypeEditor::with_settings(TypeRegistry::new(), settings);
    assert_eq!(tag_of(&mut editor, &items), TypeTag::Agent);
}

#[test]
fn containers_ignore_serializable_flag() {
    let hidden = StructBuilder::new("game::Hidden").build();
    let array = TypeInfo::array(&hidden).with_serializable(false).into_type();
    let list = TypeInfo::list(&hidden).with_serializable(false).into_type();
    let map = TypeInfo::map(&prim(PrimitiveKind::String), &hidden)
        .with_serializable(false)
        .into_type();
    let mut editor = TypeEditor::new(TypeRegistry::new());

    let array = editor.resolve(&array, None);
    assert_eq!(array.tag(), TypeTag::Array);
    assert_eq!(array.element().map(|h| h.tag()), Some(TypeTag::Inert));
    assert_eq!(tag_of(&mut editor, &list), TypeTag::List);
    assert_eq!(tag_of(&mut editor, &map), TypeTag::Map);
}

#[test]
fn serializable_flag_selects_composite() {
    let plain = StructBuilder::new("game::Plain").build();
    let kept = StructBuilder::new("game::Kept").serializable().build();
    let mut editor = TypeEditor::new(TypeRegistry::new());
    assert_eq!(tag_of(&mut editor, &plain), TypeTag::Inert);
    assert_eq!(tag_of(&mut editor, &kept), TypeTag::Object);
}

#[test]
fn hidden_beats_built_in() {
    let game = game();
    let mut editor = TypeEditor::new(game.registry);
    let secret = field(&game.player, "secret");
    assert_eq!(editor.resolve(secret.ty(), Some(&secret)).tag(), TypeTag::Inert);
    assert_eq!(editor.resolve(secret.ty(), None).tag(), TypeTag::I32);
}

// -----------------------------------------------------------------------------
// Fail-open

#[test]
fn unresolvable_types_are_inert() {
    let opaque = TypeInfo::opaque("native::Mesh").into_type();
    let holder = StructBuilder::new("game::Holder")
        .field("mesh", &opaque)
        .field("unnamed", &Type::type_ref())
        .field_with("missing", &Type::type_ref(), marked(RefTarget::new("game::Nowhere")))
        .serializable()
        .build();
    let mut editor = TypeEditor::new(TypeRegistry::new());

    for name in ["mesh", "unnamed", "missing"] {
        let f = field(&holder, name);
        let handler = editor.resolve(f.ty(), Some(&f));
        assert_eq!(handler.tag(), TypeTag::Inert, "{name}");

        let mut object = Object::new(&holder);
        let before = object.clone();
        let mut ui = ScriptedSurface::expanded().edit(name, Value::I32(1));
        assert!(!handler.present(&mut object, &f, &mut ui));
        assert_eq!(object, before);
    }
    assert_eq!(tag_of(&mut editor, &Type::type_ref()), TypeTag::Inert);
}

#[test]
fn self_reference_is_cut() {
    let mut registry = TypeRegistry::new();
    let node = StructBuilder::new("game::Chain")
        .field("value", &prim(PrimitiveKind::U8))
        .field_with("next", &Type::type_ref(), marked(RefTarget::new("game::Chain")))
        .serializable()
        .build();
    registry.register(node.clone());
    let mut editor = TypeEditor::new(registry);

    assert_eq!(tag_of(&mut editor, &node), TypeTag::Object);
    let handlers = editor.field_handlers(&node);
    let next = &handlers[1].1;
    assert_eq!(next.tag(), TypeTag::TypeRef);
    assert_eq!(next.bound_type(), Some(&node));
    assert_eq!(next.element().map(|h| h.tag()), Some(TypeTag::Inert));

    // A chain still serializes, one link deep.
    let mut object = Object::new(&node);
    object.set("value", Value::U8(4));
    let payload = editor.serialize(&object).unwrap();
    assert_eq!(payload.bytes(), &[4, 0]);
}

// -----------------------------------------------------------------------------
// Field context

#[test]
fn element_type_and_entry_types_come_from_the_field() {
    let mut registry = TypeRegistry::new();
    let weapon = StructBuilder::new("game::Weapon").serializable().build();
    registry.register(weapon.clone());
    let refs = TypeInfo::list(&Type::type_ref()).into_type();
    let table = TypeInfo::map(&Type::type_ref(), &Type::type_ref()).into_type();
    let holder = StructBuilder::new("game::Armory")
        .field_with("loot", &refs, marked(ElementType(weapon.clone())))
        .field_with("refs", &refs, marked(RefTarget::new("game::Weapon")))
        .field_with(
            "scores",
            &table,
            marked(EntryTypes(prim(PrimitiveKind::String), team())),
        )
        .serializable()
        .build();
    let mut editor = TypeEditor::new(registry);

    let loot = field(&holder, "loot");
    let loot = editor.resolve(loot.ty(), Some(&loot));
    assert_eq!(loot.tag(), TypeTag::List);
    assert_eq!(loot.element().map(|h| h.tag()), Some(TypeTag::Object));

    let refs = field(&holder, "refs");
    let refs = editor.resolve(refs.ty(), Some(&refs));
    let element = refs.element().unwrap();
    assert_eq!(element.tag(), TypeTag::TypeRef);
    assert_eq!(element.bound_type(), Some(&weapon));

    let scores = field(&holder, "scores");
    let scores = editor.resolve(scores.ty(), Some(&scores));
    assert_eq!(scores.tag(), TypeTag::Map);
    assert_eq!(scores.element().map(|h| h.tag()), Some(TypeTag::Enum));
}

#[test]
fn hosted_containers_become_hot_lists() {
    let count = prim(PrimitiveKind::U16);
    let item = StructBuilder::new("mod::Item")
        .field("count", &count)
        .serializable()
        .hosted()
        .build();
    let items = TypeInfo::array(&item).into_type();
    let grid = TypeInfo::array(&items).into_type();
    let bag = StructBuilder::new("mod::Bag")
        .field("items", &items)
        .field("grid", &grid)
        .field("names", &TypeInfo::list(&prim(PrimitiveKind::String)).into_type())
        .serializable()
        .hosted()
        .build();
    let mut hosted = TypeRegistry::hosted();
    hosted.register(bag.clone());

    let settings = EditorSettings::default().with_hosted(hosted);
    let mut editor = TypeEditor::with_settings(TypeRegistry::new(), settings);
    let tags: Vec<TypeTag> = editor
        .field_handlers(&bag)
        .iter()
        .map(|(_, h)| h.tag())
        .collect();
    assert_eq!(tags, [TypeTag::HotList, TypeTag::HotList, TypeTag::List]);

    let stack = |n: u16| {
        let mut object = Object::new(&item);
        object.set("count", Value::U16(n));
        Value::Object(Box::new(object))
    };
    let mut object = Object::new(&bag);
    object.set("items", Value::Seq(vec![stack(1), stack(2)]));
    object.set("grid", Value::Seq(vec![Value::Seq(vec![stack(3)]), Value::Seq(Vec::new())]));
    let payload = editor.serialize(&object).unwrap();
    assert_eq!(editor.deserialize(&bag, &payload).unwrap(), object);

    // Without a secondary runtime they are plain arrays.
    let mut editor = TypeEditor::new(TypeRegistry::new());
    assert_eq!(tag_of(&mut editor, &items), TypeTag::Array);
}

#[test]
fn hosted_reference_prefers_hosted_types() {
    let native = StructBuilder::new("Loot").serializable().build();
    let hosted_loot = StructBuilder::new("Loot")
        .field("gold", &prim(PrimitiveKind::U32))
        .serializable()
        .hosted()
        .build();
    let chest = StructBuilder::new("mod::Chest")
        .field_with("loot", &Type::type_ref(), marked(RefTarget::new("Loot")))
        .serializable()
        .hosted()
        .build();

    let mut primary = TypeRegistry::new();
    primary.register(native.clone());
    let mut hosted = TypeRegistry::hosted();
    hosted.register(hosted_loot.clone());
    hosted.register(chest.clone());

    let settings = EditorSettings::default().with_hosted(hosted);
    let mut editor = TypeEditor::with_settings(primary, settings);
    let loot = field(&chest, "loot");
    let handler = editor.resolve(loot.ty(), Some(&loot));
    let bound = handler.bound_type().unwrap();
    assert_eq!(bound, &hosted_loot);
    assert_ne!(bound, &native);
}

// -----------------------------------------------------------------------------
// Dispatch

#[test]
fn present_all_visits_every_field() {
    let game = game();
    let mut editor = TypeEditor::new(game.registry);
    let mut object = Object::new(&game.player);
    let mut ui = ScriptedSurface::default()
        .edit("hp", Value::I32(5))
        .edit("name", Value::Str("Ann".into()))
        .pick_enum("team", 2);

    assert!(editor.present_all(&mut object, &mut ui));
    assert_eq!(object.get("hp"), Some(&Value::I32(5)));
    assert_eq!(object.get("name"), Some(&Value::Str("Ann".into())));
    assert_eq!(object.get("team"), Some(&Value::Enum(2)));
    for label in ["squad", "target"] {
        assert!(ui.was_drawn(label), "{label}");
    }
    assert!(!ui.was_drawn("stash"));

    let mut ui = ScriptedSurface::default();
    assert!(!editor.present_all(&mut object, &mut ui));
}

fn boost(object: &mut Object, ui: &mut dyn crate::Surface) -> bool {
    ui.draw_label("boost");
    object.set("level", Value::U8(99)).is_some()
}

#[test]
fn inspector_hook_runs_after_fields() {
    let ty = StructBuilder::new("game::Skill")
        .field("level", &prim(PrimitiveKind::U8))
        .with_attribute(InspectorHook(boost))
        .serializable()
        .build();
    let mut editor = TypeEditor::new(TypeRegistry::new());
    let mut object = Object::new(&ty);
    let mut ui = ScriptedSurface::default();

    assert!(editor.present_all(&mut object, &mut ui));
    assert_eq!(ui.drawn, ["level", "boost"]);
    assert_eq!(ui.max_indent, 1);
    assert_eq!(ui.indent, 0);
    assert_eq!(object.get("level"), Some(&Value::U8(99)));
}

#[test]
fn auto_set_all_fills_references() {
    let game = game();
    let object_ty = game.registry.object_type().unwrap();
    let rig = StructBuilder::new("game::Rig")
        .field("owner", &game.player)
        .field("target", &game.node)
        .serializable()
        .build();
    let mut editor = TypeEditor::new(game.registry);

    let target = Handle::new(2, "Target", &game.node);
    let root = SceneNode::new(Handle::new(1, "Root", &object_ty))
        .with_child(SceneNode::new(target.clone()));

    let mut object = Object::new(&rig);
    assert!(editor.auto_set_all(&mut object, &root));
    assert_eq!(object.get("target"), Some(&Value::Handle(target.clone())));
    // Nested composites are filled too.
    let owner = object.get("owner").and_then(Value::as_object).unwrap();
    assert_eq!(owner.get("target"), Some(&Value::Handle(target)));

    assert!(!editor.auto_set_all(&mut object, &root));
}

#[test]
fn agent_auto_set_through_dispatch() {
    let brain = TypeInfo::opaque("game::Brain").with_attribute(Agent).into_type();
    let npc = StructBuilder::new("game::Npc")
        .field("brain", &brain)
        .serializable()
        .build();
    let node = TypeInfo::handle("game::Node", None).into_type();
    let mind = Handle::new(9, "mind", &brain);
    let root = SceneNode::new(Handle::new(1, "Root", &node))
        .with_child(SceneNode::new(Handle::new(2, "Head", &node)).with_component(mind.clone()));

    let mut editor = TypeEditor::new(TypeRegistry::new());
    let mut object = Object::new(&npc);
    assert!(editor.auto_set_all(&mut object, &root));
    assert_eq!(object.get("brain"), Some(&Value::Handle(mind)));
}

#[test]
fn player_round_trip() {
    for format in [WireFormat::Compact, WireFormat::Tagged] {
        let game = game();
        let settings = EditorSettings::default().with_wire_format(format);
        let mut editor = TypeEditor::with_settings(game.registry, settings);

        let mut weapon = Object::new(&game.weapon);
        weapon.set("damage", Value::I32(12));
        let mut object = Object::new(&game.player);
        object.set("hp", Value::I32(30));
        object.set("name", Value::Str("Ann".into()));
        object.set("team", Value::Enum(1));
        object.set("squad", Value::Seq(vec![Value::Enum(2), Value::Enum(0)]));
        object.set("weapon", Value::Object(Box::new(weapon)));
        object.set("target", Value::Handle(Handle::new(4, "Crate", &game.node)));

        let payload = editor.serialize(&object).unwrap();
        assert_eq!(payload.objects().len(), 1);
        assert_eq!(editor.deserialize(&game.player, &payload).unwrap(), object);
    }
}

#[test]
fn default_player_layout() {
    let game = game();
    let mut editor = TypeEditor::new(game.registry);
    let payload = editor.serialize(&Object::new(&game.player)).unwrap();
    // hp, name, team, squad, absent weapon, null target.
    assert_eq!(
        payload.bytes(),
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 255, 255, 255, 255]
    );
}

#[test]
fn stream_errors_propagate() {
    let game = game();
    let mut editor = TypeEditor::new(game.registry);
    let payload = editor.serialize(&Object::new(&game.player)).unwrap();
    let (mut bytes, objects) = payload.into_parts();

    bytes.push(0);
    let long = Payload::new(bytes.clone(), objects.clone());
    assert_eq!(
        editor.deserialize(&game.player, &long),
        Err(StreamError::TrailingBytes(1))
    );

    bytes.truncate(6);
    let short = Payload::new(bytes, objects);
    assert!(matches!(
        editor.deserialize(&game.player, &short),
        Err(StreamError::Underrun { .. })
    ));
}

#[test]
fn object_references_must_fit_the_field() {
    let registry = TypeRegistry::new();
    let object_ty = registry.object_type().unwrap();
    let light = TypeInfo::handle("game::Light", Some(&object_ty)).into_type();
    let audio = TypeInfo::handle("game::Audio", Some(&object_ty)).into_type();
    let lamp = StructBuilder::new("game::Lamp")
        .field("bulb", &light)
        .serializable()
        .build();
    let mut editor = TypeEditor::new(registry);

    // One handler per handle type.
    let lights = editor.resolve(&light, None);
    assert!(Arc::ptr_eq(&lights, &editor.resolve(&light, None)));
    assert!(!Arc::ptr_eq(&lights, &editor.resolve(&audio, None)));

    let speaker = Handle::new(5, "speaker", &audio);
    let payload = Payload::new(vec![0, 0, 0, 0], vec![speaker]);
    assert_eq!(
        editor.deserialize(&lamp, &payload),
        Err(StreamError::IncompatibleObject {
            expected: "game::Light".into(),
            found: "game::Audio".into(),
        })
    );

    let bulb = Handle::new(6, "bulb", &light);
    let payload = Payload::new(vec![0, 0, 0, 0], vec![bulb.clone()]);
    let copy = editor.deserialize(&lamp, &payload).unwrap();
    assert_eq!(copy.get("bulb"), Some(&Value::Handle(bulb)));
}

#[test]
fn merge_keeps_unserialized_fields() {
    let game = game();
    let mut editor = TypeEditor::new(game.registry);
    let mut source = Object::new(&game.player);
    source.set("hp", Value::I32(8));
    let payload = editor.serialize(&source).unwrap();

    let mut target = Object::new(&game.player);
    target.set("secret", Value::I32(3));
    target.set("stash", Value::I32(4));
    editor.merge(&mut target, &payload).unwrap();
    assert_eq!(target.get("hp"), Some(&Value::I32(8)));
    assert_eq!(target.get("secret"), Some(&Value::I32(3)));
    assert_eq!(target.get("stash"), Some(&Value::I32(4)));
}

// -----------------------------------------------------------------------------
// Scenarios

#[test]
fn single_int_field() {
    let ty = StructBuilder::new("game::Counter")
        .field("count", &prim(PrimitiveKind::I32))
        .serializable()
        .build();
    let mut editor = TypeEditor::new(TypeRegistry::new());
    let mut object = Object::new(&ty);
    object.set("count", Value::I32(42));

    let payload = editor.serialize(&object).unwrap();
    assert_eq!(payload.bytes(), &42i32.to_le_bytes());
    let copy = editor.deserialize(&ty, &payload).unwrap();
    assert_eq!(copy.get("count"), Some(&Value::I32(42)));
}

#[test]
fn list_of_enums() {
    let ty = StructBuilder::new("game::Roster")
        .field("teams", &TypeInfo::list(&team()).into_type())
        .serializable()
        .build();
    let mut editor = TypeEditor::new(TypeRegistry::new());
    let teams = Value::Seq(vec![Value::Enum(2), Value::Enum(0), Value::Enum(1)]);
    let mut object = Object::new(&ty);
    object.set("teams", teams.clone());

    let payload = editor.serialize(&object).unwrap();
    assert_eq!(payload.bytes(), &[3, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0]);
    let copy = editor.deserialize(&ty, &payload).unwrap();
    assert_eq!(copy.get("teams"), Some(&teams));
}

#[test]
fn hidden_fields_are_left_alone() {
    let registry = TypeRegistry::new();
    let object_ty = registry.object_type().unwrap();
    let door_ty = TypeInfo::handle("game::Door", Some(&object_ty)).into_type();
    let vault = StructBuilder::new("game::Vault")
        .field_with("door", &door_ty, marked(HideInInspector))
        .field_with("code", &prim(PrimitiveKind::I32), marked(HideInInspector))
        .serializable()
        .build();
    let mut editor = TypeEditor::new(registry);

    let door = field(&vault, "door");
    assert_eq!(editor.resolve(door.ty(), Some(&door)).tag(), TypeTag::Inert);

    let mut object = Object::new(&vault);
    object.set("code", Value::I32(1234));
    let before = object.clone();

    let mut ui = ScriptedSurface::expanded()
        .edit("code", Value::I32(0))
        .pick_object("door", Some(Handle::new(5, "door", &door_ty)));
    assert!(!editor.present_all(&mut object, &mut ui));
    assert!(ui.drawn.is_empty());

    let root = SceneNode::new(Handle::new(1, "Root", &object_ty))
        .with_child(SceneNode::new(Handle::new(5, "door", &door_ty)));
    assert!(!editor.auto_set_all(&mut object, &root));
    assert_eq!(object, before);
}

#[test]
fn array_of_references_binds_the_named_type() {
    let game = game();
    let refs = TypeInfo::array(&Type::type_ref()).into_type();
    let arsenal = StructBuilder::new("game::Arsenal")
        .field_with("weapons", &refs, marked(RefTarget::new("game::Weapon")))
        .serializable()
        .build();
    let mut editor = TypeEditor::new(game.registry);

    let weapons = field(&arsenal, "weapons");
    let handler = editor.resolve(weapons.ty(), Some(&weapons));
    assert_eq!(handler.tag(), TypeTag::Array);
    let element = handler.element().unwrap();
    assert_eq!(element.tag(), TypeTag::TypeRef);
    assert_eq!(element.bound_type(), Some(&game.weapon));
    assert_ne!(element.bound_type(), Some(&Type::type_ref()));
}

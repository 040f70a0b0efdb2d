use vc_reflect::info::Type;
use vc_reflect::value::Object;
use vc_stream::{Payload, StreamError, StreamReader, StreamWriter};

use crate::handler::{FieldHandlers, auto_set_fields, merge_fields, present_fields, write_fields};
use crate::{SceneNode, Surface, TypeEditor};

// -----------------------------------------------------------------------------
// Dispatch

impl TypeEditor {
    /// Resolves the handler of every serializable field of `ty`, in the
    /// order the type source lists them.
    pub fn field_handlers(&mut self, ty: &Type) -> FieldHandlers {
        self.poll_release();
        self.resolve_fields(ty)
    }

    /// Presents every serializable field of `object`.
    ///
    /// Every field is visited, so edits of later fields still apply after an
    /// earlier one reported a change. Returns whether anything changed.
    pub fn present_all(&mut self, object: &mut Object, ui: &mut dyn Surface) -> bool {
        let fields = self.field_handlers(object.ty());
        present_fields(&fields, object, ui)
    }

    /// Fills the empty object references of `object` from the scene under
    /// `root`. Returns whether any slot was filled.
    pub fn auto_set_all(&mut self, object: &mut Object, root: &SceneNode) -> bool {
        let fields = self.field_handlers(object.ty());
        auto_set_fields(&fields, object, root)
    }

    /// Writes the serializable fields of `object` in declared order.
    pub fn write_object(
        &mut self,
        object: &Object,
        writer: &mut StreamWriter,
    ) -> Result<(), StreamError> {
        let fields = self.field_handlers(object.ty());
        write_fields(&fields, object, writer)
    }

    /// Merges serializable fields read from `reader` into `object`.
    ///
    /// Fields that are not serialized keep their current value.
    pub fn merge_object(
        &mut self,
        object: &mut Object,
        reader: &mut StreamReader<'_>,
    ) -> Result<(), StreamError> {
        let fields = self.field_handlers(object.ty());
        merge_fields(&fields, object, reader)
    }

    /// Serializes `object` in the configured wire format.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_inspect::TypeEditor;
    /// use vc_reflect::info::{PrimitiveKind, StructBuilder, Type};
    /// use vc_reflect::registry::TypeRegistry;
    /// use vc_reflect::value::{Object, Value};
    ///
    /// let ty = StructBuilder::new("game::Score")
    ///     .field("points", &Type::primitive(PrimitiveKind::I32))
    ///     .serializable()
    ///     .build();
    /// let mut score = Object::new(&ty);
    /// score.set("points", Value::I32(42));
    ///
    /// let mut editor = TypeEditor::new(TypeRegistry::new());
    /// let payload = editor.serialize(&score).unwrap();
    /// assert_eq!(payload.bytes(), &[42, 0, 0, 0]);
    ///
    /// let copy = editor.deserialize(&ty, &payload).unwrap();
    /// assert_eq!(copy.get("points"), Some(&Value::I32(42)));
    /// ```
    pub fn serialize(&mut self, object: &Object) -> Result<Payload, StreamError> {
        let mut writer = StreamWriter::new(self.settings().wire_format());
        self.write_object(object, &mut writer)?;
        Ok(writer.finish())
    }

    /// Reads a fresh object of type `ty` from `payload`.
    ///
    /// The whole payload must be consumed.
    pub fn deserialize(&mut self, ty: &Type, payload: &Payload) -> Result<Object, StreamError> {
        let mut object = Object::new(ty);
        self.merge(&mut object, payload)?;
        Ok(object)
    }

    /// Merges `payload` into an existing object.
    ///
    /// On error the object may be partly updated.
    pub fn merge(&mut self, object: &mut Object, payload: &Payload) -> Result<(), StreamError> {
        let mut reader = StreamReader::from_payload(self.settings().wire_format(), payload);
        self.merge_object(object, &mut reader)?;
        reader.finish()
    }
}

mod enum_type;
mod field;
mod input_object_type;
mod interface_type;
mod named_type_ref;
mod object_type;
mod parameter;
mod resolved_type;
mod resolver;
mod scalar_type;
mod type_annotation;
mod type_handle;
mod type_registry;
mod union_type;

pub use enum_type::EnumType;
pub use enum_type::EnumVariant;
pub use field::Field;
pub use input_object_type::InputField;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use named_type_ref::NamedTypeRef;
pub use object_type::ObjectType;
pub use parameter::Parameter;
pub use resolved_type::ResolvedType;
pub use resolver::FieldContext;
pub use resolver::FieldError;
pub use resolver::FieldResolverFn;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub use type_handle::TypeHandle;
pub use type_registry::TypeRegistry;
pub use union_type::UnionType;

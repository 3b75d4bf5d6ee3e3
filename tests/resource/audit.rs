use keel::Entity;
use time::PrimitiveDateTime;
use uuid::Uuid;

#[derive(Entity, Debug, Default, Clone, PartialEq)]
#[keel(schema = "audit", alias = "e")]
pub struct AuditEvent {
    #[keel(primary_key)]
    pub id: Uuid,
    pub kind: String,
    #[keel(name = "payload")]
    pub data: Option<Vec<u8>>,
    #[keel(notnull, default = "CURRENT_TIMESTAMP")]
    pub created_at: Option<PrimitiveDateTime>,
    #[keel(skip)]
    pub cached: bool,
}

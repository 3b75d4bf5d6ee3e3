use keel::Entity;

#[derive(Entity, Debug, Default, Clone, PartialEq)]
#[keel(name = "users")]
pub struct User {
    #[keel(primary_key, auto_increment)]
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
}

impl User {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

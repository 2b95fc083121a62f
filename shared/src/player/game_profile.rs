/// Account profile of a player: its name plus signed profile properties
/// (skin textures and the like).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameProfile {
    pub name: String,
    pub properties: Vec<ProfileProperty>,
}

impl GameProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: ProfileProperty) -> Self {
        self.properties.push(property);
        self
    }

    pub fn property(&self, key: &str) -> Option<&ProfileProperty> {
        self.properties.iter().find(|property| property.key == key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileProperty {
    pub key: String,
    pub value: String,
    pub signature: String,
}

impl ProfileProperty {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            signature: signature.into(),
        }
    }
}

/// Chat session of a player.
///
/// Reserved: the packet source does not decode chat sessions yet, so this is
/// never populated on incoming deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChatSession;

use bevy::{prelude::{Component, Entity, ReflectComponent}, reflect::Reflect};

#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct CharacterRig {
    pub graphics: Entity,
    pub arm_pivot: Option<Entity>,
}

impl Default for CharacterRig {
    fn default() -> Self {
        Self {
            graphics: Entity::PLACEHOLDER,
            arm_pivot: None,
        }
    }
}

#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct PlayerGraphics {}

#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct ArmPivot {}

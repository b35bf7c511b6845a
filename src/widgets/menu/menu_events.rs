//! Menu bar events.

#[derive(Clone, Debug)]
pub struct NewAnimationEvent;

#[derive(Clone, Debug)]
pub struct OpenAnimationEvent;

#[derive(Clone, Debug)]
pub struct SaveAnimationEvent;

#[derive(Clone, Debug)]
pub struct SaveAnimationAsEvent;

#[derive(Clone, Debug)]
pub struct ToggleLibraryEvent;

#[derive(Clone, Debug)]
pub struct ShowSetupEvent;

#[derive(Clone, Debug)]
pub struct ShowPrefsEvent;

#[derive(Clone, Debug)]
pub struct ShowHelpEvent;

#[derive(Clone, Debug)]
pub struct QuitEvent;

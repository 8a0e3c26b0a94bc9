pub(crate) const MENU: &[u8] = include_bytes!("../../../../assets/svg/menu.svg");
pub(crate) const CLOSE: &[u8] =
    include_bytes!("../../../../assets/svg/close.svg");
pub(crate) const CHEVRON_LEFT: &[u8] =
    include_bytes!("../../../../assets/svg/chevron-left.svg");
pub(crate) const CHEVRON_DOWN: &[u8] =
    include_bytes!("../../../../assets/svg/chevron-down.svg");
pub(crate) const CHEVRON_UP: &[u8] =
    include_bytes!("../../../../assets/svg/chevron-up.svg");
pub(crate) const PLAY: &[u8] = include_bytes!("../../../../assets/svg/play.svg");
pub(crate) const HEART: &[u8] =
    include_bytes!("../../../../assets/svg/heart.svg");
pub(crate) const SHOPPING_CART: &[u8] =
    include_bytes!("../../../../assets/svg/shopping-cart.svg");
pub(crate) const BELL: &[u8] = include_bytes!("../../../../assets/svg/bell.svg");
pub(crate) const STAR: &[u8] = include_bytes!("../../../../assets/svg/star.svg");
pub(crate) const SHARE: &[u8] =
    include_bytes!("../../../../assets/svg/share.svg");
pub(crate) const MORE_HORIZONTAL: &[u8] =
    include_bytes!("../../../../assets/svg/more-horizontal.svg");
pub(crate) const PLACEHOLDER: &[u8] =
    include_bytes!("../../../../assets/svg/placeholder.svg");
pub(crate) const APP_ICON_DATA: &[u8] =
    include_bytes!("../../../../assets/logo/logo-small.png");

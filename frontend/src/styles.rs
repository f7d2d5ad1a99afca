pub const APP_SHELL: &str = "min-h-screen bg-gray-50 text-gray-900 font-sans";

// Hub
pub const HUB_CONTAINER: &str = "p-8 max-w-4xl mx-auto";
pub const HUB_TITLE: &str = "text-4xl font-bold mb-8 text-center";
pub const HUB_GRID: &str = "grid grid-cols-1 md:grid-cols-2 gap-6";
pub const HUB_CARD: &str = "block p-6 bg-white rounded-xl shadow-sm hover:shadow-md transition-shadow border-2 border-gray-100 hover:border-blue-500";
pub const HUB_CARD_TITLE: &str = "text-2xl font-bold mb-2";
pub const HUB_CARD_TEXT: &str = "text-gray-600";

// Twister page
pub const GAME_PAGE: &str = "min-h-screen bg-sky-100 font-['Patrick_Hand'] p-4 flex flex-col items-center";
pub const GAME_CARD: &str = "max-w-md w-full bg-white rounded-2xl shadow-xl border-4 border-black overflow-hidden";
pub const GAME_HEADER: &str = "bg-yellow-300 p-4 border-b-4 border-black flex justify-between items-center";
pub const GAME_TITLE: &str = "text-3xl font-bold text-black";
pub const GAME_AREA: &str = "p-8 flex flex-col items-center gap-8";
pub const BUTTON_ICON: &str = "p-2 hover:bg-yellow-400 rounded-full transition-colors border-2 border-transparent hover:border-black";

pub const WHEEL_FRAME: &str = "relative w-[320px] h-[320px] mx-auto";
pub const WHEEL_POINTER: &str = "absolute top-0 left-1/2 -translate-x-1/2 -mt-2 z-10";

pub const RESULT_AREA: &str = "h-24 flex items-center justify-center w-full px-4";
pub const RESULT_TEXT: &str = "text-3xl font-bold text-center text-black drop-shadow-md leading-tight";
pub const RESULT_SPINNING: &str = "text-2xl text-gray-500 animate-pulse";
pub const RESULT_IDLE: &str = "text-xl text-gray-400";

pub const SPIN_BUTTON: &str = "w-full py-4 text-2xl font-bold text-white rounded-xl shadow-[4px_4px_0px_0px_rgba(0,0,0,1)] border-2 border-black transition-all active:shadow-none active:translate-x-[4px] active:translate-y-[4px]";
pub const SPIN_BUTTON_ACTIVE: &str = "bg-blue-500 hover:bg-blue-600";
pub const SPIN_BUTTON_DISABLED: &str = "bg-gray-400 cursor-not-allowed";

// Settings panel
pub const SETTINGS_PANEL: &str = "border-t-4 border-black bg-gray-50 p-4";
pub const SETTINGS_TITLE: &str = "text-xl font-bold mb-4";
pub const SETTINGS_LABEL: &str = "block text-lg mb-2";
pub const SLIDER: &str = "w-full h-3 bg-gray-200 rounded-lg appearance-none cursor-pointer accent-blue-500";
pub const TOGGLE_ON: &str = "px-4 py-2 rounded-lg border-2 border-black font-bold transition-colors bg-green-500 text-white";
pub const TOGGLE_OFF: &str = "px-4 py-2 rounded-lg border-2 border-black font-bold transition-colors bg-gray-300 text-gray-600";
pub const COLOR_NAME_INPUT: &str = "flex-1 p-2 border-2 border-black rounded-lg font-sans";
pub const COLOR_PICKER: &str = "w-12 h-11 p-1 border-2 border-black rounded-lg cursor-pointer";
pub const ADD_BUTTON: &str = "px-4 bg-green-500 text-white border-2 border-black rounded-lg shadow-[2px_2px_0px_0px_rgba(0,0,0,1)] active:shadow-none active:translate-x-[2px] active:translate-y-[2px]";
pub const COLOR_LIST: &str = "space-y-2 max-h-40 overflow-y-auto pr-2";
pub const COLOR_ROW: &str = "flex items-center justify-between bg-white p-2 border-2 border-gray-200 rounded-lg";
pub const COLOR_SWATCH: &str = "w-6 h-6 rounded-full border border-black";
pub const REMOVE_BUTTON: &str = "text-red-500 hover:bg-red-50 p-1 rounded";

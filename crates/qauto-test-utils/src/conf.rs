//! Configuration file text in the shape the patcher expects.

/// Render a small `quasar.conf.js` declaring the given framework items.
///
/// Lists use the inline `[ 'A', 'B' ]` style a person would type by hand,
/// which the patcher must tolerate.
pub fn quasar_conf(components: &[&str], directives: &[&str], plugins: &[&str]) -> String {
    format!(
        "// Configuration for your app\n\
         module.exports = function (ctx) {{\n\
         \x20 return {{\n\
         \x20   boot: ['axios'],\n\
         \x20   framework: {{\n\
         \x20     iconSet: 'material-icons',\n\
         \x20     {},\n\
         \x20     {},\n\
         \x20     {}\n\
         \x20   }},\n\
         \x20   build: {{ vueRouterMode: 'hash' }}\n\
         \x20 }}\n\
         }}\n",
        inline_group("components", components),
        inline_group("directives", directives),
        inline_group("plugins", plugins),
    )
}

/// `group: [ 'A', 'B' ]`, or `group: []` when empty.
pub fn inline_group(group: &str, items: &[&str]) -> String {
    if items.is_empty() {
        return format!("{group}: []");
    }
    let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
    format!("{group}: [ {} ]", quoted.join(", "))
}

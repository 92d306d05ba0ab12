//! 核心宏定义
//!
//! 配置结构体的默认值统一通过宏声明，避免手写重复的`Default`实现。

/// 为结构体实现Default trait的宏
///
/// 使用示例:
/// ```rust
/// use verlet_fluid::impl_default;
///
/// struct GridConfig {
///     side: usize,
///     label: String,
/// }
///
/// impl_default!(GridConfig {
///     side: 256,
///     label: String::new(),
/// });
///
/// assert_eq!(GridConfig::default().side, 256);
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}

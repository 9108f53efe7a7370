//! Fixed text of the generated `JSONHandler.cs`.

/// Usings, namespace and class openers, up to the lookup table opener.
pub const HEADER: &str = r#"
using System.Text.Json;
using System.Text.Json.Serialization;
using System.Text.Json.Serialization.Metadata;

namespace JSONHandler
{
    public static class JSONHandler 
    {
        private static readonly Dictionary<Type, JsonTypeInfo> _serializerContexts = new  Dictionary<Type, JsonTypeInfo>(){
"#;

/// Lookup table closer, `Serialize<T>` / `Deserialize<T>` and the start of
/// the contextualization region.
pub const MIDDLE: &str = r#"
        };

        public static string Serialize<T>(T obj)
        {
            if (!_serializerContexts.TryGetValue(typeof(T), out var context))
            {
                throw new ArgumentException($"No serializer context found for type { typeof(T)}");
            }

            return System.Text.Json.JsonSerializer.Serialize(obj, context);
        }

        public static T Deserialize<T>(string json)
            {
            if (!_serializerContexts.TryGetValue(typeof(T), out var context))
                {
                throw new ArgumentException($"No serializer context found for type {typeof(T)}");
                }

            return System.Text.Json.JsonSerializer.Deserialize<T>(json, (JsonTypeInfo<T>)context);
            }
        }
#region ContextualizationOfClasses
    // space for adding context classes
"#;

/// End of the region and the `JsonAotAttribute` declaration.
pub const FOOTER: &str = r#"
#endregion

    [AttributeUsage(AttributeTargets.Class)]
    public class JsonAotAttribute : Attribute { }
    }
"#;

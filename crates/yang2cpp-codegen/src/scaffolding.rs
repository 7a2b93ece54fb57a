//! Runtime scaffolding header
//!
//! Fixed support code shared by every generated model. Generated classes
//! derive from `CppYangModel::BasicNode` and hold their leaves as
//! `CppYangModel::Leaf<T>`; nothing here depends on the input schema.

/// File name the generated headers include
pub const SCAFFOLDING_FILE_NAME: &str = "yang2cpp.h";

/// Contents of [`SCAFFOLDING_FILE_NAME`]
pub const SCAFFOLDING: &str = r#"/**************************************************************************************************/
/**
 * \file
 * \brief Basic classes used by yang2cpp generated code
 *
 * WARNING WARNING --> This is an auto generated file <-- WARNING WARNING
 *
 */
/**************************************************************************************************/

#ifndef __YANG2CPP_H__
#define __YANG2CPP_H__

#include <map>
#include <stdint.h>
#include <string>

/**************************************************************************************************/

namespace CppYangModel {

/**
 * \brief Addressable schema node
 */
class BasicNode {
   public:
    /**
     * \brief Constructor
     * \param path  Path of the node
     */
    BasicNode(std::string path) : path_(path) {}

   private:
    const std::string path_;
};

/**************************************************************************************************/
/**
 * \brief Leaf of the tree
 */
template <class T>
class Leaf : public BasicNode {
   public:
    /**
     * \brief Constructor
     * \param path  Path of the leaf
     */
    Leaf(std::string path) : BasicNode(path) {}

    /**
     * \brief Set the value of the leaf
     * \param value  Value to be set
     */
    void setValue(const T& value) {
        value_ = value;
    }

    /**
     * \brief Get the value of the leaf
     * \return Value of the leaf
     */
    T getValue() const {
        return value_;
    }

   private:
    T value_{};
};

} /* namespace CppYangModel */

#endif /* __YANG2CPP_H__ */
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::{BASE_NODE, LEAF};

    #[test]
    fn test_scaffolding_defines_referenced_types() {
        let (namespace, base) = BASE_NODE.split_once("::").unwrap();
        let (_, leaf) = LEAF.split_once("::").unwrap();

        assert!(SCAFFOLDING.contains(&format!("namespace {namespace} {{")));
        assert!(SCAFFOLDING.contains(&format!("class {base} {{")));
        assert!(SCAFFOLDING.contains(&format!("class {leaf} : public {base} {{")));
    }

    #[test]
    fn test_scaffolding_is_guarded() {
        assert!(SCAFFOLDING.contains("#ifndef __YANG2CPP_H__"));
        assert!(SCAFFOLDING.trim_end().ends_with("#endif /* __YANG2CPP_H__ */"));
    }
}

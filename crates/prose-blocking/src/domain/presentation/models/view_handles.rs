// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use prose_utils::id_string;

id_string!(
    /// Refers to the search bar of a list owned by the host UI.
    SearchBarHandle
);

id_string!(
    /// Refers to a view created by the host UI.
    ViewHandle
);
